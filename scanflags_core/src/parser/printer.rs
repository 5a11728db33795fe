use terminal_size::{terminal_size, Width};

use crate::api::Flag;
use crate::model::Value;
use crate::parser::interface::{wrap, UserInterface};

// Tabs are assumed to render 8 columns wide.
const TAB_WIDTH: usize = 8;

pub(crate) struct Printer {
    terminal_width: Option<usize>,
}

impl Printer {
    pub(crate) fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(terminal_width)
    }

    pub(crate) fn new(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }

    pub(crate) fn print_created(&self, flag: &Flag, user_interface: &(impl UserInterface + ?Sized)) {
        let default = flag.default_value();
        user_interface.print(format!(
            "\tFlag Created!\n\tName: {name}\n\tDefault: {default}\n\tType: {t}\n",
            name = flag.name(),
            t = default.type_tag(),
        ));
    }

    pub(crate) fn print_parsed(
        &self,
        name: &str,
        value: &Value,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        user_interface.print(format!(
            "\tFlag {name} Parsed!\n\tData: {value}\n\tType: {t}\n",
            t = value.type_tag(),
        ));
    }

    pub(crate) fn print_usage(&self, flag: &Flag, user_interface: &(impl UserInterface + ?Sized)) {
        user_interface.print(flag.usage().to_string());
    }

    pub(crate) fn print_defaults(
        &self,
        flags: &[Flag],
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        for flag in flags {
            let default = flag.default_value();
            let description = format!("{} (default {default})", flag.usage());
            let lines = match self.terminal_width {
                Some(width) => wrap(&description, width.saturating_sub(TAB_WIDTH)),
                None => vec![description],
            };
            let body = lines
                .iter()
                .map(|line| format!("\t{line}"))
                .collect::<Vec<String>>()
                .join("\n");

            user_interface.print(format!(
                "{name} {t}\n{body}\n",
                name = flag.name(),
                t = default.type_tag(),
            ));
        }
    }
}
