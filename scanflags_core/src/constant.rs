/// The leading character every flag name carries.
pub(crate) const MARKER: char = '-';

pub(crate) const HELP_SHORT: &str = "-h";
pub(crate) const HELP_NAME: &str = "-help";

pub(crate) fn is_help_token(token: &str) -> bool {
    token == HELP_SHORT || token == HELP_NAME
}
