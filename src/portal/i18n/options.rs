use crate::portal::domain::Language;
use crate::portal::services::sort_localized;

const PURPOSES_EN: [&str; 30] = [
    "Earth Observation",
    "Technology Development",
    "Communications",
    "Earth Science",
    "Space Science",
    "Space Science/Technology Demonstration",
    "Communications/Technology Development",
    "Communications/Maritime Tracking",
    "Technology Demonstration",
    "Navigation/Global Positioning",
    "Earth Observation/Technology Development",
    "Earth Observation/Communications",
    "Earth/Space Observation",
    "Educational",
    "Earth Observation/Earth Science",
    "Platform",
    "Earth Observation/Space Science",
    "Earth Observation/Navigation",
    "Communications/Navigation",
    "Space Observation",
    "Surveillance",
    "Navigation/Regional Positioning",
    "Space Science/Technology Development",
    "Mission Extension Technology",
    "Earth Science/Earth Observation",
    "Earth Observation/Communications/Space Science",
    "Meteorological",
    "Technology Development/Educational",
    "Satellite Positioning",
    "Other",
];

const PURPOSES_PT: [&str; 30] = [
    "Observação da Terra",
    "Desenvolvimento de Tecnologia",
    "Comunicações",
    "Ciências da Terra",
    "Ciências Espaciais",
    "Ciências Espaciais/Demonstração Tecnológica",
    "Comunicações/Desenvolvimento de Tecnologia",
    "Comunicações/Rastreamento Marítimo",
    "Demonstração Tecnológica",
    "Navegação/Posicionamento Global",
    "Observação da Terra/Desenvolvimento de Tecnologia",
    "Observação da Terra/Comunicações",
    "Observação da Terra/Espaço",
    "Educacional",
    "Observação da Terra/Ciências da Terra",
    "Plataforma",
    "Observação da Terra/Ciências Espaciais",
    "Observação da Terra/Navegação",
    "Comunicações/Navegação",
    "Observação Espacial",
    "Vigilância",
    "Navegação/Posicionamento Regional",
    "Ciências Espaciais/Desenvolvimento de Tecnologia",
    "Tecnologia de Extensão de Missão",
    "Ciências da Terra/Observação da Terra",
    "Observação da Terra/Comunicações/Ciências Espaciais",
    "Meteorológico",
    "Desenvolvimento de Tecnologia/Educacional",
    "Posicionamento por Satélite",
    "Outro",
];

const SECTORS_EN: [&str; 7] = [
    "Academic",
    "Agribusiness",
    "Climate",
    "Industrial",
    "Military",
    "Scientific",
    "Other",
];

const SECTORS_PT: [&str; 7] = [
    "Acadêmico",
    "Agronegócio",
    "Climático",
    "Industrial",
    "Militar",
    "Científico",
    "Outro",
];

/// Sovereign states offered in the country selector (English names)
pub const COUNTRIES: [&str; 195] = [
    "Afghanistan", "Albania", "Algeria", "Andorra", "Angola", "Antigua and Barbuda",
    "Argentina", "Armenia", "Australia", "Austria", "Azerbaijan", "Bahamas", "Bahrain",
    "Bangladesh", "Barbados", "Belarus", "Belgium", "Belize", "Benin", "Bhutan", "Bolivia",
    "Bosnia and Herzegovina", "Botswana", "Brazil", "Brunei", "Bulgaria", "Burkina Faso",
    "Burundi", "Cabo Verde", "Cambodia", "Cameroon", "Canada", "Central African Republic",
    "Chad", "Chile", "China", "Colombia", "Comoros", "Congo", "Costa Rica", "Cote d'Ivoire",
    "Croatia", "Cuba", "Cyprus", "Czechia", "Democratic Republic of the Congo", "Denmark",
    "Djibouti", "Dominica", "Dominican Republic", "Ecuador", "Egypt", "El Salvador",
    "Equatorial Guinea", "Eritrea", "Estonia", "Eswatini", "Ethiopia", "Fiji", "Finland",
    "France", "Gabon", "Gambia", "Georgia", "Germany", "Ghana", "Greece", "Grenada",
    "Guatemala", "Guinea", "Guinea-Bissau", "Guyana", "Haiti", "Honduras", "Hungary",
    "Iceland", "India", "Indonesia", "Iran", "Iraq", "Ireland", "Israel", "Italy", "Jamaica",
    "Japan", "Jordan", "Kazakhstan", "Kenya", "Kiribati", "Kuwait", "Kyrgyzstan", "Laos",
    "Latvia", "Lebanon", "Lesotho", "Liberia", "Libya", "Liechtenstein", "Lithuania",
    "Luxembourg", "Madagascar", "Malawi", "Malaysia", "Maldives", "Mali", "Malta",
    "Marshall Islands", "Mauritania", "Mauritius", "Mexico", "Micronesia", "Moldova", "Monaco",
    "Mongolia", "Montenegro", "Morocco", "Mozambique", "Myanmar", "Namibia", "Nauru", "Nepal",
    "Netherlands", "New Zealand", "Nicaragua", "Niger", "Nigeria", "North Korea",
    "North Macedonia", "Norway", "Oman", "Pakistan", "Palau", "Panama", "Papua New Guinea",
    "Paraguay", "Peru", "Philippines", "Poland", "Portugal", "Qatar", "Romania", "Russia",
    "Rwanda", "Saint Kitts and Nevis", "Saint Lucia", "Saint Vincent and the Grenadines",
    "Samoa", "San Marino", "Sao Tome and Principe", "Saudi Arabia", "Senegal", "Serbia",
    "Seychelles", "Sierra Leone", "Singapore", "Slovakia", "Slovenia", "Solomon Islands",
    "Somalia", "South Africa", "South Korea", "South Sudan", "Spain", "Sri Lanka", "Sudan",
    "Suriname", "Sweden", "Switzerland", "Syria", "Taiwan", "Tajikistan", "Tanzania",
    "Thailand", "Timor-Leste", "Togo", "Tonga", "Trinidad and Tobago", "Tunisia", "Turkey",
    "Turkmenistan", "Tuvalu", "Uganda", "Ukraine", "United Arab Emirates", "United Kingdom",
    "United States", "Uruguay", "Uzbekistan", "Vanuatu", "Vatican City", "Venezuela",
    "Vietnam", "Yemen", "Zambia", "Zimbabwe",
];

/// Purpose options for the language, in locale order
///
/// The list includes the language's "Other" sentinel.
pub fn purpose_options(language: Language) -> Vec<&'static str> {
    let mut options = match language {
        Language::En => PURPOSES_EN.to_vec(),
        Language::Pt => PURPOSES_PT.to_vec(),
    };
    sort_localized(&mut options);
    options
}

/// Business-sector options for the language, in locale order
pub fn sector_options(language: Language) -> Vec<&'static str> {
    let mut options = match language {
        Language::En => SECTORS_EN.to_vec(),
        Language::Pt => SECTORS_PT.to_vec(),
    };
    sort_localized(&mut options);
    options
}

/// Countries in plain ordering, identical for every language
pub fn country_options() -> Vec<&'static str> {
    let mut countries = COUNTRIES.to_vec();
    countries.sort_unstable();
    countries
}
