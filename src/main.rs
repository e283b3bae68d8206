fn main() {
    let exit_code = genversion::app::startup::startup();
    std::process::exit(exit_code);
}
