//! Behaviour flag sets.
//!
//! Each set exposes one boolean per named bit. Bits the decoder does not
//! know about are carried in `unknown_bits` and written back untouched, so
//! files produced by newer editors survive a decode/encode cycle.

use serde::Serialize;

macro_rules! flag_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$field_meta:meta])* $field:ident = $bit:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
        pub struct $name {
            $( $(#[$field_meta])* pub $field: bool, )+
            /// Bits outside [`Self::NAMED_MASK`], kept verbatim.
            #[serde(skip_serializing_if = "is_zero")]
            pub unknown_bits: u32,
        }

        impl $name {
            /// Named flags and their bit values, lowest bit first.
            pub const FLAGS: &'static [(&'static str, u32)] = &[ $( (stringify!($field), $bit), )+ ];

            /// Union of every named bit.
            pub const NAMED_MASK: u32 = 0 $( | $bit )+;

            /// Split a packed integer into named flags.
            #[must_use]
            pub const fn decode(raw: u32) -> Self {
                Self {
                    $( $field: (raw & $bit) != 0, )+
                    unknown_bits: raw & !Self::NAMED_MASK,
                }
            }

            /// Pack the flags back into a single integer.
            #[must_use]
            pub const fn encode(&self) -> u32 {
                let mut raw = self.unknown_bits & !Self::NAMED_MASK;
                $( if self.$field { raw |= $bit; } )+
                raw
            }

            /// Bit value for a flag name.
            pub fn bit(name: &str) -> Option<u32> {
                Self::FLAGS
                    .iter()
                    .find(|(flag, _)| *flag == name)
                    .map(|(_, bit)| *bit)
            }

            pub fn get(&self, name: &str) -> Option<bool> {
                Self::bit(name).map(|bit| (self.encode() & bit) != 0)
            }

            /// Set a flag by name. Returns `false` if the name is unknown.
            pub fn set(&mut self, name: &str, value: bool) -> bool {
                let Some(bit) = Self::bit(name) else {
                    return false;
                };
                let raw = if value {
                    self.encode() | bit
                } else {
                    self.encode() & !bit
                };
                *self = Self::decode(raw);
                true
            }

            /// Iterate `(name, is_set)` over the named flags.
            pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
                let raw = self.encode();
                Self::FLAGS
                    .iter()
                    .map(move |(name, bit)| (*name, (raw & bit) != 0))
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self::decode(raw)
            }
        }

        impl From<$name> for u32 {
            fn from(flags: $name) -> Self {
                flags.encode()
            }
        }
    };
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

flag_set! {
    /// Actor behaviour flags (actors and actor objectives).
    ActorFlags {
        /// Stays at the spawn position.
        hold_position = 2,
        /// Engages the player from any direction.
        attack_direct = 4,
        follow = 8,
        headshot_immune = 16,
        /// Objective requires killing the whole gang.
        kill_whole_gang = 32,
        health_bar = 64,
        /// Secondary enemy group.
        enemy_2 = 128,
    }
}

flag_set! {
    /// Vehicle behaviour and immunity flags (cars and car objectives).
    CarFlags {
        immune_bullet = 2,
        immune_explosion = 4,
        immune_tyres = 8,
        immune_collision = 16,
        locked = 32,
        handbraked = 64,
        /// Objective requires destroying the vehicle instead of entering it.
        must_destroy = 256,
        driveby = 512,
    }
}

flag_set! {
    /// Pickup objective flags.
    PickupObjectiveFlags {
        /// Every pickup with the same model must be collected.
        collect_all = 2,
        /// Show a collection counter on screen.
        counter = 4,
    }
}
