use crate::portal::domain::Language;

/// User-facing labels for one interface language
///
/// Every language provides the same set of keys; lookups never fall back.
#[derive(Debug)]
pub struct Dictionary {
    pub hero_title: &'static str,
    pub hero_sub: &'static str,
    pub portal_title: &'static str,
    pub portal_instructions: &'static str,
    pub client_title: &'static str,
    pub request_title: &'static str,

    pub name: &'static str,
    pub name_hint: &'static str,
    pub company_id: &'static str,
    pub company_id_hint: &'static str,
    pub address: &'static str,
    pub address_hint: &'static str,
    pub email: &'static str,
    pub email_hint: &'static str,
    pub sector: &'static str,
    pub sector_hint: &'static str,
    pub country: &'static str,
    pub country_hint: &'static str,
    pub purpose: &'static str,
    pub purpose_hint: &'static str,
    pub classification: &'static str,
    pub classification_hint: &'static str,
    pub delivery: &'static str,
    pub delivery_hint: &'static str,
    pub description: &'static str,
    pub description_hint: &'static str,

    /// Purpose option that enables the free-text purpose field
    pub other_label: &'static str,
    pub other_placeholder: &'static str,
    pub other_hint: &'static str,
    pub specify_other: &'static str,

    pub filter_btn: &'static str,
    pub submit_btn: &'static str,
    pub satellites: &'static str,
    pub selected_suffix: &'static str,
    pub no_results: &'static str,
    pub filtering: &'static str,
    pub submitting: &'static str,

    pub submit_ok: &'static str,
    pub submit_rejected: &'static str,
    pub submit_connection_error: &'static str,
}

pub static EN: Dictionary = Dictionary {
    hero_title: "Satellite Data Request Portal for a smarter, more sustainable planet.",
    hero_sub: "Submit your request and instantly browse satellites ranked by sustainability.",
    portal_title: "Submit your data request",
    portal_instructions: "To make your request: Fill in the data below. Select an Ecological Classification. Define a Delivery method. Filter the Satellites.",
    client_title: "Client Information",
    request_title: "Request",

    name: "Name",
    name_hint: "Requester full name or organization contact.",
    company_id: "Company ID",
    company_id_hint: "Company identification number (CNPJ or equivalent).",
    address: "Address",
    address_hint: "Billing or correspondence address.",
    email: "Email",
    email_hint: "Primary contact email for this request.",
    sector: "Business sector",
    sector_hint: "Requester industry or activity.",
    country: "Country",
    country_hint: "Select the requester country.",
    purpose: "Purpose",
    purpose_hint: "High-level intended use of the requested satellite data.",
    classification: "Ecological classification",
    classification_hint: "Select the sustainability rank (GOLD, SILVER, BRONZE) derived from environmental criteria.",
    delivery: "Delivery",
    delivery_hint: "Choose how the data will be delivered (API or batch files).",
    description: "Description",
    description_hint: "Add details to scope the request (AOI, cadence, formats, constraints).",

    other_label: "Other",
    other_placeholder: "Describe the purpose",
    other_hint: "Provide the purpose if it is not listed.",
    specify_other: "Specify purpose",

    filter_btn: "Filter Satellites",
    submit_btn: "Submit Request",
    satellites: "Satellites (sample)",
    selected_suffix: "selected",
    no_results: "No results",
    filtering: "Searching the satellite catalog...",
    submitting: "Sending your request...",

    submit_ok: "Your request has been sent and will be processed. You will receive more information directly at the registered email.",
    submit_rejected: "Error submitting request. Please check your data.",
    submit_connection_error: "Server connection error.",
};

pub static PT: Dictionary = Dictionary {
    hero_title: "Portal de Solicitação de Dados para um planeta mais inteligente e sustentável.",
    hero_sub: "Envie sua solicitação e navegue por satélites ranqueados por sustentabilidade.",
    portal_title: "Envie sua solicitação de dados",
    portal_instructions: "Para fazer a sua Requisição: Preencha os dados abaixo. Selecione uma Classificação Ecológica. Defina uma forma de Entrega. Filtre os Satélites.",
    client_title: "Dados do Cliente",
    request_title: "Solicitação",

    name: "Nome",
    name_hint: "Nome completo do solicitante ou contato da organização.",
    company_id: "CNPJ",
    company_id_hint: "Identificação da empresa (CNPJ ou equivalente).",
    address: "Endereço",
    address_hint: "Endereço para cobrança ou correspondência.",
    email: "Email",
    email_hint: "Email de contato principal desta solicitação.",
    sector: "Ramo de atividade",
    sector_hint: "Setor/atividade do solicitante.",
    country: "País",
    country_hint: "Selecione o país do solicitante.",
    purpose: "Finalidade",
    purpose_hint: "Uso pretendido dos dados de satélite em alto nível.",
    classification: "Classificação ecológica",
    classification_hint: "Escolha o nível de sustentabilidade (OURO, PRATA, BRONZE) calculado por critérios ambientais.",
    delivery: "Entrega",
    delivery_hint: "Como os dados serão entregues (API ou arquivos em lote).",
    description: "Descrição",
    description_hint: "Inclua detalhes para escopo (AOI, periodicidade, formatos, restrições).",

    other_label: "Outro",
    other_placeholder: "Descreva a finalidade",
    other_hint: "Informe a finalidade caso não esteja listada.",
    specify_other: "Especificar finalidade",

    filter_btn: "Filtrar Satélites",
    submit_btn: "Enviar Solicitação",
    satellites: "Satélites (amostra)",
    selected_suffix: "selecionado(s)",
    no_results: "Sem resultados",
    filtering: "Consultando o catálogo de satélites...",
    submitting: "Enviando sua solicitação...",

    submit_ok: "Sua solicitação foi enviada e será processada. Você receberá mais informações diretamente no e-mail cadastrado.",
    submit_rejected: "Erro ao enviar solicitação. Verifique os dados.",
    submit_connection_error: "Erro de conexão com o servidor.",
};

/// Dictionary for the given language
pub fn dictionary(language: Language) -> &'static Dictionary {
    match language {
        Language::En => &EN,
        Language::Pt => &PT,
    }
}
