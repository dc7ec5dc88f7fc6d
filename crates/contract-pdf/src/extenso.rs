//! Brazilian currency amounts written out in words ("valor por extenso")
//!
//! `valor_por_extenso("1.234,56")` gives
//! `"mil duzentos e trinta e quatro reais e cinquenta e seis centavos"`.
//! Amounts of one million reais or more are not spelled out; the integer
//! part is kept as digits. Parsing is integer-only, so no digit is lost.

const UNIDADES: [&str; 10] = [
    "", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
];

const DEZ_A_DEZENOVE: [&str; 10] = [
    "dez",
    "onze",
    "doze",
    "treze",
    "quatorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];

const DEZENAS: [&str; 10] = [
    "", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta",
    "noventa",
];

const CENTENAS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

/// Upper bound (exclusive) of what `numero_por_extenso` spells out
pub const LIMITE_EXTENSO: u64 = 1_000_000;

/// Write a whole number in Portuguese words.
///
/// Returns `None` at or above one million.
pub fn numero_por_extenso(n: u64) -> Option<String> {
    match n {
        0 => Some("zero".to_string()),
        n if n < LIMITE_EXTENSO => Some(por_extenso(n)),
        _ => None,
    }
}

/// Recursive core for 1..=999_999
fn por_extenso(n: u64) -> String {
    match n {
        0 => String::new(),
        1..=9 => UNIDADES[n as usize].to_string(),
        10..=19 => DEZ_A_DEZENOVE[(n - 10) as usize].to_string(),
        20..=99 => {
            let (dezena, unidade) = (n / 10, n % 10);
            if unidade == 0 {
                DEZENAS[dezena as usize].to_string()
            } else {
                format!("{} e {}", DEZENAS[dezena as usize], por_extenso(unidade))
            }
        }
        100 => "cem".to_string(),
        101..=999 => {
            let (centena, resto) = (n / 100, n % 100);
            if resto == 0 {
                CENTENAS[centena as usize].to_string()
            } else {
                format!("{} e {}", CENTENAS[centena as usize], por_extenso(resto))
            }
        }
        _ => {
            let (milhares, resto) = (n / 1000, n % 1000);
            let milhar = if milhares == 1 {
                "mil".to_string()
            } else {
                format!("{} mil", por_extenso(milhares))
            };

            match resto {
                0 => milhar,
                r if r < 100 => format!("{} e {}", milhar, por_extenso(r)),
                r => format!("{} {}", milhar, por_extenso(r)),
            }
        }
    }
}

/// Split "1.234,56" into (1234, 56). `None` when the string is not a
/// plain non-negative amount or the reais part does not fit in a `u64`.
///
/// Centavos beyond two digits are rounded half up, carrying into reais.
pub fn parse_valor(valor: &str) -> Option<(u64, u64)> {
    let normalized = valor.trim().replace('.', "");
    let (inteiro, fracao) = normalized.split_once(',').unwrap_or((&normalized, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (inteiro.is_empty() && fracao.is_empty())
        || !all_digits(inteiro)
        || !all_digits(fracao)
    {
        return None;
    }

    let mut reais: u64 = if inteiro.is_empty() {
        0
    } else {
        inteiro.parse().ok()?
    };

    let digito = |i: usize| fracao.as_bytes().get(i).map_or(0, |b| u64::from(b - b'0'));
    let mut centavos = digito(0) * 10 + digito(1);
    if digito(2) >= 5 {
        centavos += 1;
    }
    if centavos == 100 {
        reais = reais.checked_add(1)?;
        centavos = 0;
    }

    Some((reais, centavos))
}

/// Write a formatted BRL amount in words. Unparseable input is returned
/// unchanged.
pub fn valor_por_extenso(valor: &str) -> String {
    let Some((reais, centavos)) = parse_valor(valor) else {
        return valor.to_string();
    };

    if reais == 0 && centavos == 0 {
        return "zero reais".to_string();
    }

    let parte_reais = match reais {
        0 => None,
        1 => Some("um real".to_string()),
        n => {
            let palavras = numero_por_extenso(n).unwrap_or_else(|| n.to_string());
            Some(format!("{} reais", palavras))
        }
    };

    let parte_centavos = match centavos {
        0 => None,
        1 => Some("um centavo".to_string()),
        n => Some(format!("{} centavos", por_extenso(n))),
    };

    match (parte_reais, parte_centavos) {
        (Some(r), Some(c)) => format!("{} e {}", r, c),
        (Some(r), None) => r,
        (None, Some(c)) => c,
        (None, None) => "zero reais".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_exact_cases() {
        assert_eq!(valor_por_extenso("0,00"), "zero reais");
        assert_eq!(valor_por_extenso("1,00"), "um real");
        assert_eq!(
            valor_por_extenso("1.234,56"),
            "mil duzentos e trinta e quatro reais e cinquenta e seis centavos"
        );
        assert_eq!(valor_por_extenso("100,00"), "cem reais");
        assert_eq!(valor_por_extenso("2.000,00"), "dois mil reais");
    }

    #[test]
    fn test_number_boundaries() {
        let cases = [
            (0, "zero"),
            (1, "um"),
            (10, "dez"),
            (11, "onze"),
            (19, "dezenove"),
            (20, "vinte"),
            (21, "vinte e um"),
            (99, "noventa e nove"),
            (100, "cem"),
            (101, "cento e um"),
            (110, "cento e dez"),
            (200, "duzentos"),
            (999, "novecentos e noventa e nove"),
            (1000, "mil"),
            (1001, "mil e um"),
            (1099, "mil e noventa e nove"),
            (1100, "mil cem"),
            (2000, "dois mil"),
            (2500, "dois mil quinhentos"),
            (21_030, "vinte e um mil e trinta"),
            (100_000, "cem mil"),
            (999_999, "novecentos e noventa e nove mil novecentos e noventa e nove"),
        ];

        for (n, expected) in cases {
            assert_eq!(numero_por_extenso(n).as_deref(), Some(expected), "n = {}", n);
        }
    }

    #[test]
    fn test_million_is_not_spelled_out() {
        assert_eq!(numero_por_extenso(LIMITE_EXTENSO), None);
        assert_eq!(valor_por_extenso("1.000.000,00"), "1000000 reais");
        assert_eq!(
            valor_por_extenso("2.500.000,10"),
            "2500000 reais e dez centavos"
        );
    }

    #[test]
    fn test_only_centavos_has_no_connector() {
        assert_eq!(valor_por_extenso("0,01"), "um centavo");
        assert_eq!(valor_por_extenso("0,50"), "cinquenta centavos");
        assert_eq!(valor_por_extenso("1,01"), "um real e um centavo");
        assert_eq!(valor_por_extenso("15,00"), "quinze reais");
    }

    #[test]
    fn test_single_decimal_digit_means_tens_of_centavos() {
        assert_eq!(valor_por_extenso("3,5"), "três reais e cinquenta centavos");
    }

    #[test]
    fn test_malformed_input_is_returned_unchanged() {
        for input in ["", "abc", "R$ 10,00", "1,2,3", "-5,00", "12abc", "NaN", "1e5"] {
            assert_eq!(valor_por_extenso(input), input);
        }
    }

    #[test]
    fn test_parse_valor() {
        assert_eq!(parse_valor("1.234,56"), Some((1234, 56)));
        assert_eq!(parse_valor(" 7 "), Some((7, 0)));
        assert_eq!(parse_valor(",99"), Some((0, 99)));
        assert_eq!(parse_valor("1,999"), Some((2, 0)));
        assert_eq!(parse_valor("0,995"), Some((1, 0)));
        assert_eq!(parse_valor("2,125"), Some((2, 13)));
        assert_eq!(parse_valor("2,124"), Some((2, 12)));
        assert_eq!(parse_valor("x"), None);
        assert_eq!(parse_valor(","), None);
    }

    #[test]
    fn test_large_amounts_keep_every_digit() {
        assert_eq!(
            parse_valor("9.007.199.254.740.993,00"),
            Some((9_007_199_254_740_993, 0))
        );
        assert_eq!(
            valor_por_extenso("9.007.199.254.740.993,00"),
            "9007199254740993 reais"
        );
        assert_eq!(
            valor_por_extenso("18.446.744.073.709.551.615,01"),
            "18446744073709551615 reais e um centavo"
        );
    }

    #[test]
    fn test_amount_beyond_u64_is_returned_unchanged() {
        for input in ["99.999.999.999.999.999.999,00", "18446744073709551616"] {
            assert_eq!(parse_valor(input), None);
            assert_eq!(valor_por_extenso(input), input);
        }
        // Rounding may not carry past the largest amount either
        assert_eq!(parse_valor("18446744073709551615,999"), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn formatar(reais: u64, centavos: u64) -> String {
        let digits = reais.to_string();
        let mut grouped = String::new();
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        format!("{},{:02}", grouped, centavos)
    }

    proptest! {
        /// Property: conversion is a pure function of the input
        #[test]
        fn conversion_is_idempotent(input in "\\PC{0,20}") {
            prop_assert_eq!(valor_por_extenso(&input), valor_por_extenso(&input));
        }

        /// Property: formatted amounts round-trip through the parser
        #[test]
        fn formatted_amounts_parse(reais in 0u64..LIMITE_EXTENSO, centavos in 0u64..100) {
            prop_assert_eq!(parse_valor(&formatar(reais, centavos)), Some((reais, centavos)));
        }

        /// Property: any representable amount keeps its exact digits
        #[test]
        fn large_amounts_parse_exactly(reais in any::<u64>(), centavos in 0u64..100) {
            prop_assert_eq!(parse_valor(&formatar(reais, centavos)), Some((reais, centavos)));
        }

        /// Property: words never carry dangling connectors or double spaces
        #[test]
        fn words_are_well_formed(reais in 0u64..LIMITE_EXTENSO, centavos in 0u64..100) {
            let words = valor_por_extenso(&formatar(reais, centavos));
            prop_assert!(!words.contains("  "));
            prop_assert!(!words.starts_with("e "));
            prop_assert!(!words.ends_with(" e"));
            prop_assert!(words.ends_with("reais") || words.ends_with("real")
                || words.ends_with("centavos") || words.ends_with("centavo"));
        }
    }
}
