// SPDX-License-Identifier: MPL-2.0
use clientdesk::app::{self, Flags};
use clientdesk::config;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    // --config-dir overrides the settings location before anything reads it.
    if let Ok(Some(dir)) = args.opt_value_from_str::<_, String>("--config-dir") {
        std::env::set_var(config::CONFIG_DIR_ENV, dir);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
    };

    app::run(flags)
}
