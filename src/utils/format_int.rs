/// Integer printed with `'` between groups of three digits.
pub struct NiceInt(i128);

macro_rules! impl_from {
    ($($t:ty),*) => {
        $(impl From<$t> for NiceInt {
            fn from(value: $t) -> Self {
                Self(value as i128)
            }
        })*
    };
}

impl_from!(i64, u64, usize);

impl std::fmt::Display for NiceInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 < 0 {
            f.write_str("-")?;
        }
        let digits = self.0.unsigned_abs().to_string();
        for (i, group) in digits.as_bytes().rchunks(3).rev().enumerate() {
            if i > 0 {
                f.write_str("'")?;
            }
            f.write_str(std::str::from_utf8(group).map_err(|_| std::fmt::Error)?)?;
        }
        Ok(())
    }
}
