// Mappers module - cartridge bank-translation implementations
//
// Contains the mapper factory and the individual mapper boards. Each board
// owns the bank buffers of the cartridge it was built from and resolves
// window addresses onto them.

mod mapper0;

use super::{Cartridge, Mapper};
pub use mapper0::Mapper0;

use std::fmt;

/// Error type for mapper creation and mapper-level access violations
#[derive(Debug)]
pub enum MapperError {
    /// The requested mapper number is not implemented
    UnsupportedMapper(u8),
    /// The cartridge image does not fit the mapper's constraints
    InvalidConfiguration(String),
    /// A write reached CHR-ROM, which has no write path
    ChrRomWrite(u16),
}

impl fmt::Display for MapperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapperError::UnsupportedMapper(num) => {
                write!(f, "mapper {} is not supported", num)
            }
            MapperError::InvalidConfiguration(msg) => {
                write!(f, "invalid mapper configuration: {}", msg)
            }
            MapperError::ChrRomWrite(addr) => {
                write!(f, "write to read-only CHR-ROM at ${:04X}", addr)
            }
        }
    }
}

impl std::error::Error for MapperError {}

/// Create a mapper for the given cartridge, keyed by its iNES mapper id
///
/// The cartridge's bank buffers move into the returned mapper, which from
/// then on is the sole owner of PRG/CHR/PRG-RAM memory.
///
/// # Errors
///
/// Returns `MapperError::UnsupportedMapper` for ids without an
/// implementation and `MapperError::InvalidConfiguration` when the image
/// does not fit the selected board.
pub fn create_mapper(cartridge: Cartridge) -> Result<Box<dyn Mapper>, MapperError> {
    match cartridge.mapper_id() {
        0 => Ok(Box::new(Mapper0::new(cartridge)?)),
        mapper_num => Err(MapperError::UnsupportedMapper(mapper_num)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::{Mirroring, CHR_BANK_SIZE, PRG_BANK_SIZE};

    fn test_cartridge(mapper: u8) -> Cartridge {
        let mut image = vec![0u8; 16];
        image[0..4].copy_from_slice(b"NES\x1A");
        image[4] = 1;
        image[5] = 1;
        image[6] = (mapper & 0x0F) << 4;
        image[7] = mapper & 0xF0;
        image.extend(vec![0xAA; PRG_BANK_SIZE]);
        image.extend(vec![0xBB; CHR_BANK_SIZE]);
        Cartridge::from_bytes(&image).expect("valid image")
    }

    #[test]
    fn test_mapper0_creation() {
        let mapper = create_mapper(test_cartridge(0)).expect("mapper 0 supported");
        assert_eq!(mapper.mirroring(), Mirroring::Horizontal);
    }

    #[test]
    fn test_unsupported_mapper() {
        let result = create_mapper(test_cartridge(99));
        assert!(matches!(result, Err(MapperError::UnsupportedMapper(99))));
    }

    #[test]
    fn test_error_display() {
        let err = MapperError::UnsupportedMapper(4);
        assert_eq!(err.to_string(), "mapper 4 is not supported");

        let err = MapperError::ChrRomWrite(0x1234);
        assert_eq!(err.to_string(), "write to read-only CHR-ROM at $1234");
    }
}
