use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = json_literal::repl::start() {
        eprintln!("{:#}", e);
        process::exit(1);
    }
}
