fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/sanctus.proto");
    tonic_build::configure()
        .build_server(true)
        .build_client(true) // The GUI uses the generated client through this crate
        .compile(&["proto/sanctus.proto"], &["proto"])?;
    Ok(())
}
