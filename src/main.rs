fn main() {
    if let Err(e) = revlens::cli::main() {
        eprintln!("❌ Error: {e}");
        std::process::exit(1);
    }
}
