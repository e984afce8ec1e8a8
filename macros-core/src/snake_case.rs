/// Converts an `UPPER_CASE` or `PascalCase` identifier to `snake_case`.
pub fn snake_case(ident: &str) -> String {
    let mut result = String::with_capacity(ident.len() + 4);
    let mut prev_lower = false;
    for c in ident.chars() {
        if c.is_uppercase() {
            if prev_lower {
                result.push('_');
            }
            result.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            result.push(c);
            if !c.is_ascii_digit() {
                prev_lower = c.is_lowercase();
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_upper_case() {
        assert_eq!(snake_case("MODER"), "moder");
        assert_eq!(snake_case("APB1ENR"), "apb1enr");
        assert_eq!(snake_case("DCKCFGR2"), "dckcfgr2");
        assert_eq!(snake_case("AHB1_RSTR"), "ahb1_rstr");
    }

    #[test]
    fn converts_pascal_case() {
        assert_eq!(snake_case("Moder"), "moder");
        assert_eq!(snake_case("GpioaModer"), "gpioa_moder");
    }
}
