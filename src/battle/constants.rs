//! Battle constants - the fixed attrition rule in one place

/// Faces on every die
pub const DIE_FACES: u8 = 6;

/// Most dice the attacker can commit to one round
pub const MAX_ATTACK_DICE: u32 = 3;

/// Most dice the defender can commit to one round
pub const MAX_DEFENSE_DICE: u32 = 2;

/// Attacking units that always stay behind and never fight
pub const ATTACK_RESERVE: u32 = 1;
