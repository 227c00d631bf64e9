/// Size in bytes of an MPEG audio frame header.
pub const HEADER_SIZE: usize = 4;

/// Value of the 11 leading header bits.
pub const SYNC_WORD: u32 = 0x7FF;

pub const VERSION_2_5: u32 = 0;
pub const VERSION_2: u32 = 2;
pub const VERSION_1: u32 = 3;

pub const LAYER_3: u32 = 1;
pub const LAYER_2: u32 = 2;
pub const LAYER_1: u32 = 3;

pub const BITRATE_FREE: u32 = 0;
pub const BITRATE_BAD: u32 = 0xF;
pub const SAMPLE_RATE_RESERVED: u32 = 3;

/// Column of `BIT_RATES` marking a reserved version or layer.
pub const RESERVED_COLUMN: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Version {
    Mpeg1,
    Mpeg2,
    Mpeg25,
}

impl Version {
    pub(crate) fn from_bits(bits: u32) -> Option<Version> {
        match bits {
            VERSION_1 => Some(Version::Mpeg1),
            VERSION_2 => Some(Version::Mpeg2),
            VERSION_2_5 => Some(Version::Mpeg25),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Layer1,
    Layer2,
    Layer3,
}

impl Layer {
    pub(crate) fn from_bits(bits: u32) -> Option<Layer> {
        match bits {
            LAYER_1 => Some(Layer::Layer1),
            LAYER_2 => Some(Layer::Layer2),
            LAYER_3 => Some(Layer::Layer3),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelMode {
    Stereo,
    JointStereo,
    DualChannel,
    SingleChannel,
}

impl ChannelMode {
    pub(crate) fn from_bits(bits: u32) -> ChannelMode {
        match bits & 0b11 {
            0 => ChannelMode::Stereo,
            1 => ChannelMode::JointStereo,
            2 => ChannelMode::DualChannel,
            _ => ChannelMode::SingleChannel,
        }
    }

    pub fn layout(self) -> ChannelLayout {
        match self {
            ChannelMode::SingleChannel => ChannelLayout::Mono,
            ChannelMode::Stereo | ChannelMode::JointStereo | ChannelMode::DualChannel => {
                ChannelLayout::Stereo
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelLayout {
    Mono,
    Stereo,
}

// Layer II (bitrate_index, channel_mode) matrix. A `true` entry rejects the pair.
// Derived from: http://mpgedit.org/mpgedit/mpeg_format/MP3Format.html
pub static IS_ALLOWED: [[bool; 4]; 17] = [
    [true, true, true, true],     // free
    [true, false, false, false],  // 32
    [true, false, false, false],  // 48
    [true, false, false, false],  // 56
    [true, true, true, true],     // 64
    [true, false, false, false],  // 80
    [true, true, true, true],     // 96
    [true, true, true, true],     // 112
    [true, true, true, true],     // 128
    [true, true, true, true],     // 160
    [true, true, true, true],     // 192
    [false, true, true, true],    // 224
    [false, true, true, true],    // 256
    [false, true, true, true],    // 320
    [false, true, true, true],    // 384
    [false, false, false, false], // bad
    [false, false, false, false],
];

// Indexed by [version][layer] header bits.
pub static VERSION_LAYER_COLUMNS: [[usize; 4]; 4] = [
    // reserved, L3, L2, L1
    [5, 4, 4, 3], // Mpeg25
    [5, 5, 5, 5], // reserved
    [5, 4, 4, 3], // Mpeg2
    [5, 2, 1, 0], // Mpeg1
];

// Bitrates in kbps, indexed by [bitrate_index][column].
pub static BIT_RATES: [[u32; 6]; 16] = [
    // V1L1, V1L2, V1L3, V2L1, V2L2 & V2L3, reserved
    [0, 0, 0, 0, 0, 0],
    [32, 32, 32, 32, 8, 0],
    [64, 48, 40, 48, 16, 0],
    [96, 56, 48, 56, 24, 0],
    [128, 64, 56, 64, 32, 0],
    [160, 80, 64, 80, 40, 0],
    [192, 96, 80, 96, 48, 0],
    [224, 112, 96, 112, 56, 0],
    [256, 128, 112, 128, 64, 0],
    [288, 160, 128, 144, 80, 0],
    [320, 192, 160, 160, 96, 0],
    [352, 224, 192, 176, 112, 0],
    [384, 256, 224, 192, 128, 0],
    [416, 320, 256, 224, 144, 0],
    [448, 384, 320, 256, 160, 0],
    [0, 0, 0, 0, 0, 0],
];

// Sample rates in Hz, indexed by [sample_rate_index][version].
pub static SAMPLING_RATES: [[u32; 4]; 4] = [
    // Mpeg25, reserved, Mpeg2, Mpeg1
    [11025, 0, 22050, 44100],
    [12000, 0, 24000, 48000],
    [8000, 0, 16000, 32000],
    [0, 0, 0, 0],
];
