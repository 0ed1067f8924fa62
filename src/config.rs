use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Width of the words handed to the runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IntWidth {
    W32,
    W64,
}

impl IntWidth {
    pub fn bits(self) -> u32 {
        match self {
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
        }
    }

    pub fn range(self) -> (i64, i64) {
        match self {
            IntWidth::W32 => (i32::MIN.into(), i32::MAX.into()),
            IntWidth::W64 => (i64::MIN, i64::MAX),
        }
    }

    pub fn fits(self, x: i64) -> bool {
        let (lo, hi) = self.range();
        lo <= x && x <= hi
    }
}

impl Default for IntWidth {
    fn default() -> Self {
        IntWidth::W64
    }
}

impl Display for IntWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

impl FromStr for IntWidth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "32" => Ok(IntWidth::W32),
            "64" => Ok(IntWidth::W64),
            _ => Err(format!("unsupported width `{}`, expected 32 or 64", s)),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub width: IntWidth,
    pub noeol: bool,
}
