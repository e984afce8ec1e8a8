/// Converts an `UPPER_CASE` identifier to `PascalCase`.
///
/// Underscores separate words; every other character is lowercased.
pub fn pascal_case(ident: &str) -> String {
    let mut result = String::with_capacity(ident.len());
    let mut word_start = true;
    for c in ident.chars() {
        if c == '_' {
            word_start = true;
        } else if word_start {
            result.extend(c.to_uppercase());
            word_start = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_upper_case() {
        assert_eq!(pascal_case("MODER"), "Moder");
        assert_eq!(pascal_case("APB1ENR"), "Apb1enr");
        assert_eq!(pascal_case("TIM6_DAC"), "Tim6Dac");
        assert_eq!(pascal_case("DHR12R1"), "Dhr12r1");
    }
}
