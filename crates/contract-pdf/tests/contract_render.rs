//! End-to-end rendering tests
//!
//! The clock is frozen through `RenderOptions`, so identical inputs must
//! give identical bytes.

use chrono::NaiveDate;
use contract_pdf::clauses::{
    DELIVERABLES_LEAD_IN, SHIPPING_DEADLINE_PHRASE, SHIPPING_DISCLOSURE,
};
use contract_pdf::layout::draw::FOOTER_DISCLAIMER;
use contract_pdf::layout::{Command, Composition, Page, Rect, CONTENT_BOTTOM, CONTENT_WIDTH};
use contract_pdf::{compose_contract, get_page_count, render_contract, RenderOptions};
use contract_types::ContractInput;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn options() -> RenderOptions {
    RenderOptions::issued_on(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
}

fn input() -> ContractInput {
    serde_json::from_value(serde_json::json!({
        "company": {
            "name": "Aurora Cosméticos LTDA",
            "tradeName": "Aurora",
            "taxId": "12.345.678/0001-90",
            "address": { "street": "Rua Augusta", "number": "1500", "city": "São Paulo", "state": "SP" },
            "email": "contato@aurora.com.br",
            "owner": { "id": "u-1", "name": "Marina Costa" }
        },
        "creator": {
            "name": "Lucas Almeida",
            "email": "lucas@example.com",
            "taxId": "123.456.789-00",
            "socialHandle": "lucasalmeida"
        },
        "campaign": { "title": "Verão 2026", "deadline": "2026-12-01" },
        "application": { "id": 42 },
        "contractValue": "1.250,50",
        "deliverables": ["1 Reels de até 60 segundos", "3 Stories com link"]
    }))
    .unwrap()
}

fn long_input(deliverables: usize) -> ContractInput {
    let mut input = input();
    input.deliverables = (1..=deliverables)
        .map(|i| {
            format!(
                "Entregável {} com roteiro aprovado, legenda revisada e marcação da marca nos primeiros segundos do vídeo.",
                i
            )
        })
        .collect();
    input
}

fn footer_labels(composition: &Composition) -> Vec<String> {
    composition
        .pages
        .iter()
        .flat_map(|p| p.footer_labels())
        .map(str::to_string)
        .collect()
}

/// Runs of text belonging to a lettered item directly after the lead-in
fn lettered_after_lead_in(composition: &Composition) -> Vec<String> {
    let texts: Vec<&str> = composition.texts().collect();
    let Some(lead) = texts.iter().position(|t| t.starts_with("Os entregáveis")) else {
        return Vec::new();
    };
    texts[lead..]
        .iter()
        .skip_while(|t| !t.ends_with(')'))
        .take_while(|t| !t.starts_with("CLÁUSULA"))
        .filter(|t| t.ends_with(')') && t.len() <= 4)
        .map(|t| t.to_string())
        .collect()
}

#[test]
fn identical_input_gives_identical_bytes() {
    let a = render_contract(&input(), &options()).unwrap();
    let b = render_contract(&input(), &options()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn short_contract_pages_match_footers() {
    let composition = compose_contract(&input(), &options());
    let expected: Vec<String> = (1..=composition.page_count())
        .map(|n| format!("Página {}", n))
        .collect();
    assert_eq!(footer_labels(&composition), expected);
}

#[test]
fn long_contract_paginates_with_sequential_footers() {
    let input = long_input(40);
    let composition = compose_contract(&input, &options());
    assert!(composition.page_count() > 2);

    let expected: Vec<String> = (1..=composition.page_count())
        .map(|n| format!("Página {}", n))
        .collect();
    assert_eq!(footer_labels(&composition), expected);

    let bytes = render_contract(&input, &options()).unwrap();
    assert_eq!(get_page_count(&bytes).unwrap() as usize, composition.page_count());
}

#[test]
fn every_page_starts_with_header_and_ends_with_footer() {
    let composition = compose_contract(&long_input(30), &options());
    for page in &composition.pages {
        assert!(matches!(
            page.commands.first(),
            Some(Command::FillRoundedRect { .. })
        ));
        let texts: Vec<&str> = page.texts().collect();
        assert!(texts.contains(&"Contrato nº 000042 • 18/10/2026"));
        let footer_at = texts.iter().position(|t| t.starts_with("Página ")).unwrap();
        assert_eq!(footer_at, texts.len() - 2);
    }
}

#[test]
fn shipping_phrase_follows_flag() {
    let mut input = input();
    let text = compose_contract(&input, &options()).plain_text().replace('\n', " ");
    assert!(!text.contains("3 (três) dias após o recebimento"));
    assert!(!text.contains("receberá da CONTRATANTE, sem ônus"));

    input.includes_product_shipping = true;
    let text = compose_contract(&input, &options()).plain_text().replace('\n', " ");
    let compact = |s: &str| s.split_whitespace().collect::<Vec<_>>().join(" ");
    assert!(compact(&text).contains(&compact(SHIPPING_DEADLINE_PHRASE)));
    assert!(compact(&text).contains(&compact(SHIPPING_DISCLOSURE)));
}

#[test]
fn deliverables_render_as_sequential_letters() {
    let composition = compose_contract(&long_input(5), &options());
    assert_eq!(
        lettered_after_lead_in(&composition),
        vec!["a)", "b)", "c)", "d)", "e)"]
    );
}

#[test]
fn empty_deliverables_omit_lead_in_and_items() {
    let mut input = input();
    input.deliverables.clear();
    let composition = compose_contract(&input, &options());
    assert!(!composition.plain_text().contains(DELIVERABLES_LEAD_IN));
    assert!(lettered_after_lead_in(&composition).is_empty());
}

#[test]
fn additional_clause_is_numbered_after_jurisdiction() {
    let mut input = input();
    let text = compose_contract(&input, &options()).plain_text();
    assert!(!text.contains("10.2."));

    input.additional_clauses = Some("Cláusula extra acordada entre as partes.".into());
    let texts: Vec<String> = compose_contract(&input, &options())
        .texts()
        .map(str::to_string)
        .collect();
    let first = texts.iter().position(|t| t == "10.1.").unwrap();
    let second = texts.iter().position(|t| t == "10.2.").unwrap();
    assert!(texts[first + 1].starts_with("Fica eleito o foro da Comarca de São Paulo/SP"));
    assert!(second > first);
    assert_eq!(texts[second + 1], "Cláusula extra acordada entre as partes.");
}

#[test]
fn missing_optional_facts_are_not_rendered_blank() {
    let mut input = input();
    input.company.trade_name = None;
    input.creator.tax_id = None;
    let text = compose_contract(&input, &options()).plain_text();
    assert!(!text.contains("Nome fantasia"));
    assert!(!text.contains("CPF"));
    assert!(text.contains("Razão social: Aurora Cosméticos LTDA"));
}

/// Stroked rectangles narrower than the content column: the signature boxes
fn signature_boxes(page: &Page) -> Vec<Rect> {
    page.commands
        .iter()
        .filter_map(|c| match c {
            Command::StrokeRect { rect, .. } if rect.width < CONTENT_WIDTH - 1.0 => Some(*rect),
            _ => None,
        })
        .collect()
}

#[test]
fn signature_block_is_never_split() {
    for deliverables in 0..30 {
        let composition = compose_contract(&long_input(deliverables), &options());

        let pages_with_boxes: Vec<&Page> = composition
            .pages
            .iter()
            .filter(|p| !signature_boxes(p).is_empty())
            .collect();
        assert_eq!(pages_with_boxes.len(), 1, "deliverables = {}", deliverables);

        let page = pages_with_boxes[0];
        let boxes = signature_boxes(page);
        assert_eq!(boxes.len(), 2, "deliverables = {}", deliverables);
        assert!(boxes.iter().all(|r| r.bottom() <= CONTENT_BOTTOM));

        let texts: Vec<&str> = page.texts().collect();
        assert!(texts.contains(&"Aurora Cosméticos LTDA"), "deliverables = {}", deliverables);
        assert!(texts.contains(&"Lucas Almeida"), "deliverables = {}", deliverables);
    }
}

#[test]
fn long_free_text_stays_inside_the_content_area() {
    let mut input = input();
    input.additional_clauses = Some("Cláusula adicional com texto livre e extenso. ".repeat(150));
    input.payment_terms = Some("Pagamento em parcelas mensais conforme cronograma. ".repeat(120));
    let composition = compose_contract(&input, &options());

    let overflowing: Vec<(u32, String)> = composition
        .pages
        .iter()
        .flat_map(|p| {
            p.commands.iter().filter_map(move |c| match c {
                Command::Text(run)
                    if run.y > CONTENT_BOTTOM
                        && !run.text.starts_with("Página ")
                        && run.text != FOOTER_DISCLAIMER =>
                {
                    Some((p.number, run.text.clone()))
                }
                _ => None,
            })
        })
        .collect();
    assert_eq!(overflowing, Vec::<(u32, String)>::new());

    let expected: Vec<String> = (1..=composition.page_count())
        .map(|n| format!("Página {}", n))
        .collect();
    assert_eq!(footer_labels(&composition), expected);

    // Nothing of the free text is lost
    let count = |word: &str| {
        composition
            .texts()
            .flat_map(str::split_whitespace)
            .filter(|w| *w == word)
            .count()
    };
    assert_eq!(count("extenso."), 150);
    assert_eq!(count("cronograma."), 120);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Property: footers are labelled 1..=pages with no gaps or repeats
    #[test]
    fn footers_match_pages(deliverables in 0usize..60, shipping in any::<bool>()) {
        let mut input = long_input(deliverables);
        input.includes_product_shipping = shipping;
        let composition = compose_contract(&input, &options());

        let expected: Vec<String> = (1..=composition.page_count())
            .map(|n| format!("Página {}", n))
            .collect();
        prop_assert_eq!(footer_labels(&composition), expected);
    }
}
