//! Contract text assembly
//!
//! The template is an ordered list of sections. Each section is an ordered
//! list of [`ClauseRule`]s: a predicate over the input and a producer of
//! abstract [`Content`]. Assembly evaluates the rules in order, numbers
//! items per section (`3.1.`, `3.2.`) and letters sub-items (`a)`, `b)`),
//! producing the flat list of [`Block`]s the layout consumes.

use chrono::{Datelike, NaiveDate};
use contract_types::{Company, ContractInput, Creator};

use crate::extenso::valor_por_extenso;

pub const DOCUMENT_TITLE: &str = "CONTRATO DE PRESTAÇÃO DE SERVIÇOS DE MARKETING DE INFLUÊNCIA";
pub const DOCUMENT_SUBTITLE: &str =
    "Instrumento particular de criação e divulgação de conteúdo digital";

pub const DELIVERABLES_LEAD_IN: &str =
    "Os entregáveis acordados entre as partes compreendem:";
pub const SHIPPING_DEADLINE_PHRASE: &str =
    "ou em até 3 (três) dias após o recebimento do produto e do briefing enviados pela CONTRATANTE, o que for aplicável";
pub const SHIPPING_DISCLOSURE: &str = "Além do valor acima, o(a) CONTRATADO(A) receberá da CONTRATANTE, sem ônus, o(s) produto(s) necessário(s) à produção do conteúdo, que não integram a remuneração ora ajustada.";
pub const DEFAULT_PAYMENT_TERMS: &str = "O pagamento será efetuado em até 30 (trinta) dias corridos após a publicação e a aprovação do conteúdo, mediante transferência bancária ou PIX para conta de titularidade do(a) CONTRATADO(A).";
pub const VALUE_CAPTION: &str = "VALOR TOTAL DO CONTRATO";

const MESES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// `18/10/2026`
pub fn short_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `18 de outubro de 2026`
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        MESES[date.month0() as usize],
        date.year()
    )
}

/// Text drawn in the header band of every page
#[derive(Debug, Clone, PartialEq)]
pub struct Masthead {
    pub title: String,
    pub subtitle: String,
    pub contract_number: String,
    pub issued_on: String,
}

impl Masthead {
    pub fn new(input: &ContractInput, issued_on: NaiveDate) -> Self {
        Self {
            title: DOCUMENT_TITLE.to_string(),
            subtitle: DOCUMENT_SUBTITLE.to_string(),
            contract_number: input.contract_number(),
            issued_on: short_date(issued_on),
        }
    }

    /// "Contrato nº 000042 • 18/10/2026"
    pub fn reference_line(&self) -> String {
        format!("Contrato nº {} • {}", self.contract_number, self.issued_on)
    }
}

/// One side of the signature block
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureParty {
    pub name: String,
    pub role: String,
    pub detail: Option<String>,
}

/// Laid-out unit of the document
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Shaded bar, e.g. "CLÁUSULA PRIMEIRA – DO OBJETO"
    SectionHeader(String),
    /// Bordered identification panel
    InfoBox { label: String, facts: Vec<String> },
    /// Filled callout with the contract value
    ValueHighlight { caption: String, value: String },
    Paragraph(String),
    /// Smaller, muted disclosure line
    Note(String),
    /// "1.1." style clause item
    Numbered { label: String, text: String },
    /// "a)" style sub-item
    Lettered { label: String, text: String },
    /// Two signature boxes, never split across pages
    Signatures {
        left: SignatureParty,
        right: SignatureParty,
    },
}

/// What a clause rule emits, before numbering
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Item(String),
    SubItems(Vec<String>),
    Paragraph(String),
    Note(String),
    ValueHighlight { caption: String, value: String },
}

/// Everything a rule may read
pub struct ClauseContext<'a> {
    pub input: &'a ContractInput,
    pub issued_on: NaiveDate,
}

impl ClauseContext<'_> {
    pub fn value_in_words(&self) -> String {
        valor_por_extenso(&self.input.contract_value)
    }
}

/// Conditional text: `emit` runs only when `when` holds
pub struct ClauseRule {
    pub name: &'static str,
    pub when: fn(&ContractInput) -> bool,
    pub emit: fn(&ClauseContext) -> Vec<Content>,
}

impl ClauseRule {
    pub fn applies(&self, input: &ContractInput) -> bool {
        (self.when)(input)
    }
}

pub struct Section {
    pub ordinal: &'static str,
    pub title: &'static str,
    pub rules: &'static [ClauseRule],
}

impl Section {
    pub fn caption(&self) -> String {
        format!("CLÁUSULA {} – {}", self.ordinal, self.title)
    }
}

fn always(_: &ContractInput) -> bool {
    true
}

fn ships_product(input: &ContractInput) -> bool {
    input.includes_product_shipping
}

fn no_shipping(input: &ContractInput) -> bool {
    !input.includes_product_shipping
}

fn item(text: impl Into<String>) -> Vec<Content> {
    vec![Content::Item(text.into())]
}

fn sub_items(lead: &str, items: &[&str]) -> Vec<Content> {
    vec![
        Content::Item(lead.to_string()),
        Content::SubItems(items.iter().map(|s| s.to_string()).collect()),
    ]
}

// -- Cláusula primeira: objeto ---------------------------------------------

fn object_scope(ctx: &ClauseContext) -> Vec<Content> {
    item(format!(
        "O presente contrato tem por objeto a prestação, pelo(a) CONTRATADO(A), de serviços de criação, produção e publicação de conteúdo digital para a campanha \"{}\" da CONTRATANTE, nos termos e condições estabelecidos neste instrumento.",
        ctx.input.campaign.title.trim()
    ))
}

fn object_description(ctx: &ClauseContext) -> Vec<Content> {
    item(format!(
        "Descrição dos serviços: {}",
        ctx.input.service_description().unwrap_or_default()
    ))
}

fn has_description(input: &ContractInput) -> bool {
    input.service_description().is_some()
}

fn object_deliverables(ctx: &ClauseContext) -> Vec<Content> {
    vec![
        Content::Item(DELIVERABLES_LEAD_IN.to_string()),
        Content::SubItems(
            ctx.input
                .deliverables()
                .into_iter()
                .map(str::to_string)
                .collect(),
        ),
    ]
}

fn has_deliverables(input: &ContractInput) -> bool {
    !input.deliverables().is_empty()
}

// -- Cláusula segunda: prazo -----------------------------------------------

fn deadline_base(ctx: &ClauseContext) -> String {
    format!(
        "O(A) CONTRATADO(A) compromete-se a entregar e publicar o conteúdo até {}",
        short_date(ctx.input.campaign.deadline)
    )
}

fn deadline_plain(ctx: &ClauseContext) -> Vec<Content> {
    item(format!("{}.", deadline_base(ctx)))
}

fn deadline_with_shipping(ctx: &ClauseContext) -> Vec<Content> {
    item(format!("{}, {}.", deadline_base(ctx), SHIPPING_DEADLINE_PHRASE))
}

fn deadline_approval(_: &ClauseContext) -> Vec<Content> {
    item("Antes da publicação, o conteúdo deverá ser submetido à aprovação da CONTRATANTE, que terá até 2 (dois) dias úteis para solicitar ajustes razoáveis, limitados a 2 (duas) rodadas de revisão.")
}

// -- Cláusula terceira: valor e pagamento ----------------------------------

fn value_statement(ctx: &ClauseContext) -> Vec<Content> {
    let value = ctx.input.contract_value.trim();
    vec![
        Content::Item(format!(
            "Pela prestação dos serviços objeto deste contrato, a CONTRATANTE pagará ao(à) CONTRATADO(A) o valor total de R$ {} ({}).",
            value,
            ctx.value_in_words()
        )),
        Content::ValueHighlight {
            caption: VALUE_CAPTION.to_string(),
            value: format!("R$ {}", value),
        },
    ]
}

fn shipping_disclosure(_: &ClauseContext) -> Vec<Content> {
    vec![Content::Note(SHIPPING_DISCLOSURE.to_string())]
}

fn has_payment_terms(input: &ContractInput) -> bool {
    input.payment_terms().is_some()
}

fn no_payment_terms(input: &ContractInput) -> bool {
    input.payment_terms().is_none()
}

fn custom_payment_terms(ctx: &ClauseContext) -> Vec<Content> {
    item(ctx.input.payment_terms().unwrap_or_default())
}

fn default_payment_terms(_: &ClauseContext) -> Vec<Content> {
    item(DEFAULT_PAYMENT_TERMS)
}

fn taxes(_: &ClauseContext) -> Vec<Content> {
    item("Os tributos incidentes sobre a remuneração serão de responsabilidade de cada parte, na forma da legislação vigente.")
}

// -- Cláusulas quarta e quinta: obrigações ---------------------------------

fn creator_duties(_: &ClauseContext) -> Vec<Content> {
    sub_items(
        "São obrigações do(a) CONTRATADO(A):",
        &[
            "produzir o conteúdo com qualidade técnica e em conformidade com o briefing aprovado;",
            "identificar a publicação como publicidade, com as marcações exigidas pelas plataformas e pelo CONAR;",
            "manter o conteúdo publicado por, no mínimo, 90 (noventa) dias;",
            "não divulgar marcas concorrentes no mesmo conteúdo;",
            "fornecer, quando solicitado, as métricas de desempenho da publicação.",
        ],
    )
}

fn company_duties(_: &ClauseContext) -> Vec<Content> {
    sub_items(
        "São obrigações da CONTRATANTE:",
        &[
            "fornecer o briefing e as informações necessárias à execução dos serviços;",
            "analisar e responder às submissões de conteúdo dentro do prazo acordado;",
            "efetuar o pagamento na forma e no prazo ajustados.",
        ],
    )
}

fn company_ships_product(_: &ClauseContext) -> Vec<Content> {
    item("A CONTRATANTE arcará com o envio do produto ao endereço informado pelo(a) CONTRATADO(A), em tempo hábil para a produção do conteúdo.")
}

// -- Cláusulas sexta a nona ------------------------------------------------

fn image_rights(_: &ClauseContext) -> Vec<Content> {
    vec![
        Content::Item("O(A) CONTRATADO(A) autoriza a CONTRATANTE a utilizar o conteúdo produzido, bem como o nome e a imagem a ele associados, em seus canais próprios pelo prazo de 12 (doze) meses a contar da publicação.".to_string()),
        Content::Item("O uso em mídia paga ou por prazo superior dependerá de autorização expressa do(a) CONTRATADO(A) e poderá ensejar remuneração adicional.".to_string()),
    ]
}

fn confidentiality(_: &ClauseContext) -> Vec<Content> {
    vec![
        Content::Item("As partes obrigam-se a manter sigilo sobre as informações confidenciais a que tiverem acesso em razão deste contrato, incluindo estratégias de campanha e valores ajustados.".to_string()),
        Content::Item("As partes tratarão os dados pessoais envolvidos em conformidade com a Lei nº 13.709/2018 (Lei Geral de Proteção de Dados).".to_string()),
    ]
}

fn termination(_: &ClauseContext) -> Vec<Content> {
    vec![
        Content::Item("Este contrato poderá ser rescindido por qualquer das partes, mediante comunicação por escrito, em caso de descumprimento de qualquer de suas cláusulas.".to_string()),
        Content::Item("Rescindido o contrato por iniciativa da CONTRATANTE sem justa causa, serão devidos ao(à) CONTRATADO(A) os valores proporcionais aos serviços já executados.".to_string()),
    ]
}

fn general_provisions(_: &ClauseContext) -> Vec<Content> {
    vec![
        Content::Item("O presente contrato não gera vínculo empregatício, societário ou de representação entre as partes.".to_string()),
        Content::Item("Alterações deste contrato somente terão validade se formalizadas por escrito e aceitas por ambas as partes.".to_string()),
    ]
}

// -- Cláusula décima: foro -------------------------------------------------

/// "da Comarca de São Paulo/SP", or a generic phrase without a city
pub fn jurisdiction_venue(company: &Company) -> String {
    match (company.address.city(), company.address.state()) {
        (Some(city), Some(state)) => format!("da Comarca de {}/{}", city, state),
        (Some(city), None) => format!("da Comarca de {}", city),
        (None, _) => "do domicílio da CONTRATANTE".to_string(),
    }
}

fn jurisdiction(ctx: &ClauseContext) -> Vec<Content> {
    item(format!(
        "Fica eleito o foro {}, com renúncia expressa a qualquer outro, por mais privilegiado que seja, para dirimir quaisquer dúvidas oriundas deste contrato.",
        jurisdiction_venue(&ctx.input.company)
    ))
}

fn has_additional_clauses(input: &ContractInput) -> bool {
    input.additional_clauses().is_some()
}

fn additional_clauses(ctx: &ClauseContext) -> Vec<Content> {
    item(ctx.input.additional_clauses().unwrap_or_default())
}

#[rustfmt::skip]
pub static SECTIONS: [Section; 10] = [
    Section {
        ordinal: "PRIMEIRA",
        title: "DO OBJETO",
        rules: &[
            ClauseRule { name: "object_scope", when: always, emit: object_scope },
            ClauseRule { name: "object_description", when: has_description, emit: object_description },
            ClauseRule { name: "object_deliverables", when: has_deliverables, emit: object_deliverables },
        ],
    },
    Section {
        ordinal: "SEGUNDA",
        title: "DO PRAZO DE ENTREGA",
        rules: &[
            ClauseRule { name: "deadline_plain", when: no_shipping, emit: deadline_plain },
            ClauseRule { name: "deadline_with_shipping", when: ships_product, emit: deadline_with_shipping },
            ClauseRule { name: "deadline_approval", when: always, emit: deadline_approval },
        ],
    },
    Section {
        ordinal: "TERCEIRA",
        title: "DO VALOR E DA FORMA DE PAGAMENTO",
        rules: &[
            ClauseRule { name: "value_statement", when: always, emit: value_statement },
            ClauseRule { name: "shipping_disclosure", when: ships_product, emit: shipping_disclosure },
            ClauseRule { name: "custom_payment_terms", when: has_payment_terms, emit: custom_payment_terms },
            ClauseRule { name: "default_payment_terms", when: no_payment_terms, emit: default_payment_terms },
            ClauseRule { name: "taxes", when: always, emit: taxes },
        ],
    },
    Section {
        ordinal: "QUARTA",
        title: "DAS OBRIGAÇÕES DO(A) CONTRATADO(A)",
        rules: &[ClauseRule { name: "creator_duties", when: always, emit: creator_duties }],
    },
    Section {
        ordinal: "QUINTA",
        title: "DAS OBRIGAÇÕES DA CONTRATANTE",
        rules: &[
            ClauseRule { name: "company_duties", when: always, emit: company_duties },
            ClauseRule { name: "company_ships_product", when: ships_product, emit: company_ships_product },
        ],
    },
    Section {
        ordinal: "SEXTA",
        title: "DO USO DE IMAGEM E DA PROPRIEDADE INTELECTUAL",
        rules: &[ClauseRule { name: "image_rights", when: always, emit: image_rights }],
    },
    Section {
        ordinal: "SÉTIMA",
        title: "DA CONFIDENCIALIDADE",
        rules: &[ClauseRule { name: "confidentiality", when: always, emit: confidentiality }],
    },
    Section {
        ordinal: "OITAVA",
        title: "DA RESCISÃO",
        rules: &[ClauseRule { name: "termination", when: always, emit: termination }],
    },
    Section {
        ordinal: "NONA",
        title: "DAS DISPOSIÇÕES GERAIS",
        rules: &[ClauseRule { name: "general_provisions", when: always, emit: general_provisions }],
    },
    Section {
        ordinal: "DÉCIMA",
        title: "DO FORO",
        rules: &[
            ClauseRule { name: "jurisdiction", when: always, emit: jurisdiction },
            ClauseRule { name: "additional_clauses", when: has_additional_clauses, emit: additional_clauses },
        ],
    },
];

/// Sub-item label for a zero-based index: a, b, …, z, aa, ab, …
pub fn letter_label(index: usize) -> String {
    let mut n = index + 1;
    let mut label = Vec::new();
    while n > 0 {
        n -= 1;
        label.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    label.reverse();
    format!("{})", String::from_utf8_lossy(&label))
}

/// Evaluate one section's rules into numbered blocks
pub fn assemble_section(section: &Section, number: usize, ctx: &ClauseContext) -> Vec<Block> {
    let mut blocks = vec![Block::SectionHeader(section.caption())];
    let mut items = 0;

    for rule in section.rules.iter().filter(|r| r.applies(ctx.input)) {
        for content in (rule.emit)(ctx) {
            match content {
                Content::Item(text) => {
                    items += 1;
                    blocks.push(Block::Numbered {
                        label: format!("{}.{}.", number, items),
                        text,
                    });
                }
                Content::SubItems(entries) => {
                    blocks.extend(entries.into_iter().enumerate().map(|(i, text)| {
                        Block::Lettered {
                            label: letter_label(i),
                            text,
                        }
                    }));
                }
                Content::Paragraph(text) => blocks.push(Block::Paragraph(text)),
                Content::Note(text) => blocks.push(Block::Note(text)),
                Content::ValueHighlight { caption, value } => {
                    blocks.push(Block::ValueHighlight { caption, value })
                }
            }
        }
    }

    blocks
}

pub fn company_facts(company: &Company) -> Vec<String> {
    let mut facts = vec![format!("Razão social: {}", company.name.trim())];
    let optional = [
        ("Nome fantasia", contract_types::non_blank(&company.trade_name).map(str::to_string)),
        ("CNPJ", contract_types::non_blank(&company.tax_id).map(str::to_string)),
        ("Endereço", company.address.one_line()),
        ("E-mail", contract_types::non_blank(&company.email).map(str::to_string)),
        ("Telefone", contract_types::non_blank(&company.phone).map(str::to_string)),
        (
            "Representante",
            company
                .owner
                .as_ref()
                .map(|o| o.name.trim().to_string())
                .filter(|n| !n.is_empty()),
        ),
    ];
    facts.extend(
        optional
            .into_iter()
            .filter_map(|(label, value)| value.map(|v| format!("{}: {}", label, v))),
    );
    facts
}

pub fn creator_facts(creator: &Creator) -> Vec<String> {
    let mut facts = vec![format!("Nome: {}", creator.name.trim())];
    let optional = [
        ("CPF", contract_types::non_blank(&creator.tax_id).map(str::to_string)),
        ("Endereço", creator.address.one_line()),
        ("E-mail", Some(creator.email.trim().to_string()).filter(|e| !e.is_empty())),
        ("Telefone", contract_types::non_blank(&creator.phone).map(str::to_string)),
        ("Perfil", creator.handle()),
    ];
    facts.extend(
        optional
            .into_iter()
            .filter_map(|(label, value)| value.map(|v| format!("{}: {}", label, v))),
    );
    facts
}

fn closing_place_and_date(input: &ContractInput, issued_on: NaiveDate) -> String {
    match input.company.address.city() {
        Some(city) => format!("{}, {}.", city, long_date(issued_on)),
        None => format!("Emitido em {}.", long_date(issued_on)),
    }
}

/// Assemble the whole contract into layout blocks
pub fn assemble(input: &ContractInput, issued_on: NaiveDate) -> Vec<Block> {
    let ctx = ClauseContext { input, issued_on };

    let mut blocks = vec![
        Block::InfoBox {
            label: "CONTRATANTE".to_string(),
            facts: company_facts(&input.company),
        },
        Block::InfoBox {
            label: "CONTRATADO(A)".to_string(),
            facts: creator_facts(&input.creator),
        },
        Block::Paragraph(format!(
            "Pelo presente instrumento particular, as partes acima qualificadas têm, entre si, justo e contratado o presente Contrato de Prestação de Serviços de Marketing de Influência, referente à candidatura nº {} na plataforma, que se regerá pelas cláusulas e condições a seguir.",
            input.application.id
        )),
    ];

    for (i, section) in SECTIONS.iter().enumerate() {
        blocks.extend(assemble_section(section, i + 1, &ctx));
    }

    blocks.push(Block::Paragraph(
        "E, por estarem assim justas e contratadas, as partes firmam o presente instrumento em formato eletrônico, para que produza seus jurídicos e legais efeitos.".to_string(),
    ));
    blocks.push(Block::Paragraph(closing_place_and_date(input, issued_on)));

    let owner = input
        .company
        .owner
        .as_ref()
        .map(|o| o.name.trim())
        .filter(|n| !n.is_empty());
    blocks.push(Block::Signatures {
        left: SignatureParty {
            name: input.company.name.trim().to_string(),
            role: "CONTRATANTE".to_string(),
            detail: owner.map(|name| format!("p.p. {}", name)),
        },
        right: SignatureParty {
            name: input.creator.name.trim().to_string(),
            role: "CONTRATADO(A)".to_string(),
            detail: contract_types::non_blank(&input.creator.tax_id).map(|cpf| format!("CPF {}", cpf)),
        },
    });

    blocks
}
