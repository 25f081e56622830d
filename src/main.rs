use std::process;

fn main() {
    if let Err(e) = gitask::cli::run() {
        gitask::ui::error(&e.to_string());
        process::exit(1);
    }
}
