//! timeactions main entrypoint.

use timeactions::run;
use timeactions::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
