//! memstat entry point

fn main() {
    std::process::exit(memstat::run());
}
