//! Initial directory contents

use usuarios_core::types::{User, UserId};

/// Names present at startup, in id order starting at 1
pub const SEED_NAMES: [&str; 4] = ["Juan", "Ana", "Karen", "Luis"];

/// Build the seed directory: `[{1,Juan},{2,Ana},{3,Karen},{4,Luis}]`
pub fn default_users() -> Vec<User> {
    (1u64..)
        .zip(SEED_NAMES)
        .map(|(id, name)| User::new(UserId::new(id), name))
        .collect()
}
