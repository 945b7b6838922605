// SPDX-License-Identifier: MPL-2.0

use iced_toasts::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_dir: args
            .opt_value_from_str::<_, PathBuf>("--config-dir")
            .unwrap_or(None),
    };

    app::run(flags)
}
