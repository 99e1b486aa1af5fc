// Well-known event type labels emitted by the status-tracking producers.
//
// The store accepts any non-empty label. These exist so producers, the demo binary
// and the test generators agree on spelling.

pub const READ_STATUS: &str = "READ_STATUS";
pub const CHANGE_STATUS: &str = "CHANGE_STATUS";
pub const LOCK_STATUS: &str = "LOCK_STATUS";

pub const ALL: [&str; 3] = [READ_STATUS, CHANGE_STATUS, LOCK_STATUS];
