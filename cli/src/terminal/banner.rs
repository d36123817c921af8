use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
      ____  _    _  ____  ____  ____  ____
     / ___|| |  | || ___|| ___||  _ \|  _ \
     \___ \| |/\| || _|  | _|  | |_) | |_) |
      ___) |  /\  || |__ | |__ |  __/|  _ <
     |____/|_/  \_||____||____||_|   |_| \_\
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_green()));
}
