use crate::error::ColorFormatError;

/// Parse a 24-bit color in hexadecimal format with optional leading hash. If
/// successful, this function returns the three coordinates as unsigned bytes.
/// It transparently handles single-digit coordinates.
fn parse_hex(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 3 && digits.len() != 6 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

/// Parse a 24-bit color as three decimal coordinates separated by commas or
/// white space.
fn parse_decimal(s: &str) -> Result<[u8; 3], ColorFormatError> {
    fn parse_coordinate(s: Option<&str>) -> Result<u8, ColorFormatError> {
        let t = s.ok_or(ColorFormatError::MissingCoordinate)?.trim();
        if t.is_empty() {
            return Err(ColorFormatError::MissingCoordinate);
        }

        let n = t
            .parse::<u32>()
            .map_err(|_| ColorFormatError::MalformedDecimal)?;
        u8::try_from(n).map_err(|_| ColorFormatError::OversizedCoordinate)
    }

    let mut iter: Box<dyn Iterator<Item = &str>> = if s.contains(',') {
        Box::new(s.split(','))
    } else {
        Box::new(s.split_whitespace())
    };

    let c1 = parse_coordinate(iter.next())?;
    let c2 = parse_coordinate(iter.next())?;
    let c3 = parse_coordinate(iter.next())?;
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    Ok([c1, c2, c3])
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into 24-bit coordinates.
///
/// This function recognizes the three and six digit hexadecimal formats, with
/// or without leading hash, as well as decimal triples such as `12,34,56` or
/// `12 34 56`. Before parsing, it trims leading and trailing white space.
/// Strings made up of hexadecimal digits only are always treated as
/// hexadecimal, so that `123` denotes `#112233`.
pub(crate) fn parse(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let s = s.trim();

    if s.starts_with('#') || (!s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())) {
        parse_hex(s)
    } else if s.contains(',') || s.contains(char::is_whitespace) {
        parse_decimal(s)
    } else if s.chars().all(|c| c.is_ascii_alphanumeric()) && !s.is_empty() {
        Err(ColorFormatError::MalformedHex)
    } else {
        Err(ColorFormatError::UnknownFormat)
    }
}

#[cfg(test)]
mod test {
    use super::parse;
    use crate::error::ColorFormatError;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse("#abc"), Ok([0xaa, 0xbb, 0xcc]));
        assert_eq!(parse("  #C1DEFF "), Ok([0xc1, 0xde, 0xff]));
        assert_eq!(parse("6F9FCF"), Ok([0x6f, 0x9f, 0xcf]));
        assert_eq!(parse("123"), Ok([0x11, 0x22, 0x33]));
        assert_eq!(parse("#00"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse("#efg"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse("efg"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse("#💩00"), Err(ColorFormatError::UnexpectedCharacters));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse("12,34,56"), Ok([12, 34, 56]));
        assert_eq!(parse("255 0 7"), Ok([255, 0, 7]));
        assert_eq!(parse("1, 2, 3"), Ok([1, 2, 3]));
        assert_eq!(parse("12,,7"), Err(ColorFormatError::MissingCoordinate));
        assert_eq!(parse("12,7"), Err(ColorFormatError::MissingCoordinate));
        assert_eq!(parse("256,0,0"), Err(ColorFormatError::OversizedCoordinate));
        assert_eq!(parse("1,2,x"), Err(ColorFormatError::MalformedDecimal));
        assert_eq!(parse("1,2,3,4"), Err(ColorFormatError::TooManyCoordinates));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse(""), Err(ColorFormatError::UnknownFormat));
        assert_eq!(parse("rgb(1;2;3)"), Err(ColorFormatError::UnknownFormat));
    }
}
