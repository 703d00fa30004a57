fn main() -> Result<(), Box<dyn std::error::Error>> {
    let services_dir = "../proto/services";

    println!("cargo:rerun-if-changed={}/blog_service.proto", services_dir);

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&[format!("{services_dir}/blog_service.proto")], &[services_dir])?;

    Ok(())
}
