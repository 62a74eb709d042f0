/// Допустимая разрядность выборок .sdriq файла
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum SampleSize {
    /// 16-битные I/Q компоненты
    #[default]
    Bits16 = 16,
    /// 24-битные I/Q компоненты (хранятся в 32-битных контейнерах)
    Bits24 = 24,
}

impl SampleSize {
    /// `None` для любых значений кроме 16 и 24.
    pub fn from_bits(v: u32) -> Option<Self> {
        match v {
            16 => Some(SampleSize::Bits16),
            24 => Some(SampleSize::Bits24),
            _ => None,
        }
    }

    pub fn bits(&self) -> u32 {
        *self as u32
    }

    /// Размер одной IQ пары на диске в байтах
    pub fn frame_bytes(&self) -> usize {
        match self {
            SampleSize::Bits16 => 4, // 2 байта I + 2 байта Q
            SampleSize::Bits24 => 8, // 4 байта I + 4 байта Q
        }
    }
}

impl std::fmt::Display for SampleSize {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{} bits", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits_accepts_only_16_and_24() {
        assert_eq!(SampleSize::from_bits(16), Some(SampleSize::Bits16));
        assert_eq!(SampleSize::from_bits(24), Some(SampleSize::Bits24));
        assert_eq!(SampleSize::from_bits(20), None);
        assert_eq!(SampleSize::from_bits(0), None);
        assert_eq!(SampleSize::from_bits(32), None);
    }

    #[test]
    fn test_frame_bytes() {
        assert_eq!(SampleSize::Bits16.frame_bytes(), 4);
        assert_eq!(SampleSize::Bits24.frame_bytes(), 8);
        assert_eq!(SampleSize::default().bits(), 16);
    }
}
