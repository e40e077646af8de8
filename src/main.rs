fn main() {
    if let Err(e) = express_fx::core::Runner::run() {
        eprintln!("express_fx failed: {}", e);
        std::process::exit(1);
    }
}
