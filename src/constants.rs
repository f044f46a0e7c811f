/// First header line written when the backing file is created
pub const FILE_HEADER_TITLE: &str = "# Premium Users List";

/// Second header line describing the line format
pub const FILE_HEADER_FORMAT: &str =
    "# Format: TelegramUserID | Username (optional) | ActivatedDate";

/// Field separator inside data lines
pub const FIELD_SEPARATOR: char = '|';

/// Date format used for the activation date field
pub const ACTIVATED_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Result Messages
// =============================================================================

/// Message returned when adding a user that is already premium
pub const MSG_ALREADY_PREMIUM: &str = "already has premium access";

/// Message returned when removing a user that is not premium
pub const MSG_NOT_PREMIUM: &str = "not in premium list";
