use crate::error::ConfigError;

/// Atlas configuration.
///
/// `tile_size` is the edge length of one tile in world pixels.
/// `chunk_width`/`chunk_height` are measured in tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasConfig {
    pub tile_size: f64,
    pub chunk_width: u32,
    pub chunk_height: u32,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            tile_size: 48.0,
            chunk_width: 64,
            chunk_height: 64,
        }
    }
}

impl AtlasConfig {
    pub fn with_tile_size(mut self, tile_size: f64) -> Self {
        self.tile_size = tile_size;
        self
    }

    pub fn with_chunk_size(mut self, width: u32, height: u32) -> Self {
        self.chunk_width = width;
        self.chunk_height = height;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(ConfigError::InvalidTileSize(self.tile_size));
        }
        if self.chunk_width == 0 || self.chunk_height == 0 {
            return Err(ConfigError::InvalidChunkSize {
                width: self.chunk_width,
                height: self.chunk_height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = AtlasConfig::default();
        assert_eq!(config.tile_size, 48.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_tile_size() {
        for size in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = AtlasConfig::default().with_tile_size(size);
            assert!(matches!(config.validate(), Err(ConfigError::InvalidTileSize(_))));
        }
    }

    #[test]
    fn rejects_zero_chunk() {
        let config = AtlasConfig::default().with_chunk_size(0, 16);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidChunkSize { width: 0, height: 16 })
        );
    }
}
