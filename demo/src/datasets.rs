//! Fixed training data of the demos.

/// Truth table of logical OR.
pub const OR_INPUTS: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
pub const OR_TARGETS: [i32; 4] = [0, 1, 1, 1];

/// Spam (1) and not spam (0) messages.
pub const MESSAGES: [(&str, i32); 10] = [
    ("free money claim now", 1),
    ("winner prize cash today", 1),
    ("lowest price deals buy", 1),
    ("urgent offer act now", 1),
    ("lottery jackpot claim ticket", 1),
    ("project meeting at noon", 0),
    ("see you at school event", 0),
    ("family dinner this weekend", 0),
    ("can we talk tomorrow", 0),
    ("notes for class presentation", 0),
];
