pub mod branch_name;
pub mod branch_table;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Key of the branch table that names the active branch
pub const CURRENT_KEY: &str = "current";

/// Branch created by `init`
pub const DEFAULT_BRANCH: &str = "main";
