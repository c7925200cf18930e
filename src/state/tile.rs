use bitflags::bitflags;
use serde::Serialize;

/// Sprite frame of a frame-important block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Frame {
    pub u: i16,
    pub v: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Block {
    pub type_id: u16,
    /// Present exactly when the block id is frame-important in this file
    pub frame: Option<Frame>,
    pub paint: Option<u8>,
}

impl Block {
    pub fn new(type_id: u16) -> Self {
        Self { type_id, frame: None, paint: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Wall {
    /// Never 0; id 0 means "no wall" and decodes to `None`
    pub type_id: u16,
    pub paint: Option<u8>,
}

impl Wall {
    pub fn new(type_id: u16) -> Self {
        Self { type_id, paint: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LiquidKind {
    Water,
    Lava,
    Honey,
    Shimmer,
}

impl LiquidKind {
    /// Kind stored in the two liquid bits of the first tile header byte
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            1 => Some(LiquidKind::Water),
            2 => Some(LiquidKind::Lava),
            3 => Some(LiquidKind::Honey),
            _ => None,
        }
    }

    /// Shimmer is flagged elsewhere and stored with the water bits set
    pub fn bits(self) -> u8 {
        match self {
            LiquidKind::Water | LiquidKind::Shimmer => 1,
            LiquidKind::Lava => 2,
            LiquidKind::Honey => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Liquid {
    pub kind: LiquidKind,
    pub amount: u8,
}

bitflags! {
    /// Wiring and rendering bits carried through decode without interpretation
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
    pub struct TileExtras: u16 {
        const WIRE_RED = 0x0001;
        const WIRE_BLUE = 0x0002;
        const WIRE_GREEN = 0x0004;
        const WIRE_YELLOW = 0x0008;
        const ACTUATOR = 0x0010;
        const INACTIVE = 0x0020;
        const BLOCK_INVISIBLE = 0x0040;
        const WALL_INVISIBLE = 0x0080;
        const BLOCK_FULLBRIGHT = 0x0100;
        const WALL_FULLBRIGHT = 0x0200;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ExtraBits {
    pub flags: TileExtras,
    /// 0 full block, 1 half block, 2..=5 slopes
    pub shape: u8,
}

/// One grid cell. Block and wall are independently optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Tile {
    pub block: Option<Block>,
    pub wall: Option<Wall>,
    pub liquid: Option<Liquid>,
    pub extra: ExtraBits,
}

impl Tile {
    pub const EMPTY: Tile = Tile {
        block: None,
        wall: None,
        liquid: None,
        extra: ExtraBits { flags: TileExtras::empty(), shape: 0 },
    };

    pub fn with_block(mut self, type_id: u16) -> Self {
        self.block = Some(Block::new(type_id));
        self
    }

    pub fn with_wall(mut self, type_id: u16) -> Self {
        self.wall = Some(Wall::new(type_id));
        self
    }

    pub fn with_liquid(mut self, kind: LiquidKind, amount: u8) -> Self {
        self.liquid = Some(Liquid { kind, amount });
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Tile::EMPTY
    }
}
