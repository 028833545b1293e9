/// BCH codes protecting the format and version information
pub struct BchEncoder;

const FORMAT_GENERATOR: u32 = 0x537;
const FORMAT_XOR_MASK: u32 = 0x5412;
const VERSION_GENERATOR: u32 = 0x1F25;

impl BchEncoder {
    /// BCH(15,5) codeword for 5 data bits, XOR-masked as stored in the symbol
    pub fn encode_format(data: u8) -> u16 {
        let data = u32::from(data & 0x1F);
        let mut rem = data;
        for _ in 0..10 {
            rem = (rem << 1) ^ ((rem >> 9) * FORMAT_GENERATOR);
        }
        (((data << 10) | (rem & 0x3FF)) ^ FORMAT_XOR_MASK) as u16
    }

    /// BCH(18,6) codeword for a version number
    pub fn encode_version(version: u8) -> u32 {
        let data = u32::from(version & 0x3F);
        let mut rem = data;
        for _ in 0..12 {
            rem = (rem << 1) ^ ((rem >> 11) * VERSION_GENERATOR);
        }
        (data << 12) | (rem & 0xFFF)
    }
}
