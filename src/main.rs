fn main() {
    if let Err(e) = dealersite::app::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
