//! HUB-3 code lists: payment models and purpose codes

use serde::Serialize;

/// Two-letter prefix written in front of the payment model on its payload line
pub const PAYMENT_MODEL_PREFIX: &str = "HR";

/// Every accepted payment model code. The list is closed and not contiguous.
pub const PAYMENT_MODELS: &[&str] = &[
    "00", "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14",
    "15", "16", "17", "18", "23", "24", "25", "26", "27", "28", "29", "30", "31", "33", "34",
    "40", "41", "42", "43", "50", "55", "62", "63", "64", "65", "67", "68", "69", "83", "84",
    "99",
];

/// Whether `model` is an accepted two-digit payment model
pub fn is_payment_model(model: &str) -> bool {
    PAYMENT_MODELS.contains(&model)
}

/// An ISO 20022 purpose code with its Croatian title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurposeCode {
    pub code: &'static str,
    pub title: &'static str,
}

impl PurposeCode {
    const fn new(code: &'static str, title: &'static str) -> Self {
        Self { code, title }
    }
}

/// Look up a purpose code by its four-letter code
pub fn purpose_code(code: &str) -> Option<&'static PurposeCode> {
    PURPOSE_CODES.iter().find(|p| p.code == code)
}

/// Whether `code` is a known purpose code
pub fn is_purpose_code(code: &str) -> bool {
    purpose_code(code).is_some()
}

/// Purpose codes offered on Croatian payment orders, sorted by title
pub const PURPOSE_CODES: &[PurposeCode] = &[
    PurposeCode::new("ADMG", "Administracija"),
    PurposeCode::new("GVEA", "Austrijski državni zaposlenici, Kategorija A"),
    PurposeCode::new("GVEB", "Austrijski državni zaposlenici, Kategorija B"),
    PurposeCode::new("GVEC", "Austrijski državni zaposlenici, Kategorija C"),
    PurposeCode::new("GVED", "Austrijski državni zaposlenici, Kategorija D"),
    PurposeCode::new("BUSB", "Autobusni"),
    PurposeCode::new("CPYR", "Autorsko pravo"),
    PurposeCode::new("HSPC", "Bolnička njega"),
    PurposeCode::new("RDTX", "Cestarina"),
    PurposeCode::new("DEPT", "Depozit"),
    PurposeCode::new("DERI", "Derivati (izvedenice)"),
    PurposeCode::new("FREX", "Devizno tržište"),
    PurposeCode::new("CGDD", "Direktno terećenje nastalo kao rezultat kartične transakcije"),
    PurposeCode::new("DIVD", "Dividenda"),
    PurposeCode::new("BECH", "Dječji doplatak"),
    PurposeCode::new("CHAR", "Dobrotvorno plaćanje"),
    PurposeCode::new("ETUP", "Doplata e-novca"),
    PurposeCode::new("MTUP", "Doplata mobilnog uređaja (bon)"),
    PurposeCode::new("GOVI", "Državno osiguranje"),
    PurposeCode::new("ENRG", "Energenti"),
    PurposeCode::new("CDCD", "Gotovinska isplata"),
    PurposeCode::new("CSDB", "Gotovinska isplata"),
    PurposeCode::new("TCSC", "Gradske naknade"),
    PurposeCode::new("CDCS", "Isplata gotovine s naknadom"),
    PurposeCode::new("FAND", "Isplata naknade za elementarne nepogode"),
    PurposeCode::new("CSLP", "Isplata socijalnih zajmova društava banci"),
    PurposeCode::new("RHBS", "Isplata za vrijeme profesionalne rehabilitacije"),
    PurposeCode::new("GWLT", "Isplata žrtvama rata i invalidima"),
    PurposeCode::new(
        "ADCS",
        "Isplate za donacije, sponzorstva, savjetodavne, intelektualne i druge usluge",
    ),
    PurposeCode::new("PADD", "Izravno terećenje"),
    PurposeCode::new("INTE", "Kamata"),
    PurposeCode::new("CDDP", "Kartično plaćanje s odgodom"),
    PurposeCode::new("CDCB", "Kartično plaćanje uz gotovinski povrat (Cashback)"),
    PurposeCode::new("BOCE", "Knjiženje konverzije u Back Office-u"),
    PurposeCode::new("POPE", "Knjiženje mjesta kupnje"),
    PurposeCode::new("RCKE", "Knjiženje ponovne prezentacije čeka"),
    PurposeCode::new("AREN", "Knjiženje računa potraživanja"),
    PurposeCode::new("COMC", "Komercijalno plaćanje"),
    PurposeCode::new("UBIL", "Komunalne usluge"),
    PurposeCode::new("COMT", "Konsolidirano plaćanje treće strane za račun potrošača."),
    PurposeCode::new("SEPI", "Kupnja vrijednosnica (interna)"),
    PurposeCode::new("GDDS", "Kupovina-prodaja roba"),
    PurposeCode::new("GSCB", "Kupovina-prodaja roba i usluga uz gotovinski povrat"),
    PurposeCode::new("GDSV", "Kupovina/prodaja roba i usluga"),
    PurposeCode::new("SCVE", "Kupovina/prodaja usluga"),
    PurposeCode::new("HLTC", "Kućna njega bolesnika"),
    PurposeCode::new("CBLK", "Masovni kliring kartica"),
    PurposeCode::new("MDCS", "Medicinske usluge"),
    PurposeCode::new("NWCM", "Mrežna komunikacija"),
    PurposeCode::new("RENT", "Najam"),
    PurposeCode::new("ALLW", "Naknada"),
    PurposeCode::new("SSBE", "Naknada socijalnog osiguranja"),
    PurposeCode::new("LICF", "Naknada za licencu"),
    PurposeCode::new("GFRP", "Naknada za nezaposlene u toku stečaja"),
    PurposeCode::new("BENE", "Naknada za nezaposlenost/invaliditet"),
    PurposeCode::new("CFEE", "Naknada za poništenje"),
    PurposeCode::new("AEMP", "Naknada za zapošljavanje"),
    PurposeCode::new("COLL", "Naplata"),
    PurposeCode::new("FCOL", "Naplata naknade po kartičnoj transakciji"),
    PurposeCode::new("DBTC", "Naplata putem terećenja"),
    PurposeCode::new("NOWS", "Nenavedeno"),
    PurposeCode::new("IDCP", "Neopozivo plaćanje sa računa debitne kartice"),
    PurposeCode::new("ICCP", "Neopozivo plaćanje sa računa kreditne kartice"),
    PurposeCode::new("BONU", "Novčana nagrada (bonus)."),
    PurposeCode::new("PAYR", "Obračun plaća"),
    PurposeCode::new("BLDM", "Održavanje zgrada"),
    PurposeCode::new("HEDG", "Omeđivanje rizika (Hedging)"),
    PurposeCode::new("CDOC", "Originalno odobrenje"),
    PurposeCode::new("PPTI", "Osiguranje imovine"),
    PurposeCode::new("LBRI", "Osiguranje iz rada"),
    PurposeCode::new("OTHR", "Ostalo"),
    PurposeCode::new("CLPR", "Otplata glavnice kredita za automobil"),
    PurposeCode::new("HLRP", "Otplata stambenog kredita"),
    PurposeCode::new("LOAR", "Otplata zajma"),
    PurposeCode::new("ALMY", "Plaćanje alimentacije"),
    PurposeCode::new("RCPT", "Plaćanje blagajničke potvrde. (ReceiptPayment)"),
    PurposeCode::new("PRCP", "Plaćanje cijene"),
    PurposeCode::new("SUPP", "Plaćanje dobavljača"),
    PurposeCode::new("CFDI", "Plaćanje dospjele glavnice"),
    PurposeCode::new("GOVT", "Plaćanje države"),
    PurposeCode::new("PENS", "Plaćanje mirovine"),
    PurposeCode::new("DCRD", "Plaćanje na račun debitne kartice."),
    PurposeCode::new("CCRD", "Plaćanje na račun kreditne kartice"),
    PurposeCode::new("SALA", "Plaćanje plaće"),
    PurposeCode::new("REBT", "Plaćanje popusta/rabata"),
    PurposeCode::new("TAXS", "Plaćanje poreza"),
    PurposeCode::new("VATX", "Plaćanje poreza na dodatnu vrijednost"),
    PurposeCode::new("RINP", "Plaćanje rata koje se ponavljaju"),
    PurposeCode::new("IHRP", "Plaćanje rate pri kupnji na otplatu"),
    PurposeCode::new("IVPT", "Plaćanje računa"),
    PurposeCode::new("CDBL", "Plaćanje računa za kreditnu karticu"),
    PurposeCode::new("TREA", "Plaćanje riznice"),
    PurposeCode::new("CMDT", "Plaćanje roba"),
    PurposeCode::new("INTC", "Plaćanje unutar društva"),
    PurposeCode::new("INVS", "Plaćanje za fondove i vrijednosnice"),
    PurposeCode::new("PRME", "Plemeniti metali"),
    PurposeCode::new("AGRT", "Poljoprivredni transfer"),
    PurposeCode::new("INTX", "Porez na dohodak"),
    PurposeCode::new("PTXP", "Porez na imovinu"),
    PurposeCode::new("NITX", "Porez na neto dohodak"),
    PurposeCode::new("ESTX", "Porez na ostavštinu"),
    PurposeCode::new("GSTX", "Porez na robu i usluge"),
    PurposeCode::new("HSTX", "Porez na stambeni prostor"),
    PurposeCode::new("FWLV", "Porez na strane radnike"),
    PurposeCode::new("WHLD", "Porez po odbitku"),
    PurposeCode::new("BEXP", "Poslovni troškovi"),
    PurposeCode::new("REFU", "Povrat"),
    PurposeCode::new("TAXR", "Povrat poreza"),
    PurposeCode::new("RIMB", "Povrat prethodne pogrešne transakcije"),
    PurposeCode::new("OFEE", "Početna naknada (Opening Fee)"),
    PurposeCode::new("ADVA", "Predujam"),
    PurposeCode::new("INSU", "Premija osiguranja"),
    PurposeCode::new("INPC", "Premija osiguranja za vozilo"),
    PurposeCode::new("TRPT", "Prepaid cestarina (ENC)"),
    PurposeCode::new("SUBS", "Pretplata"),
    PurposeCode::new("CASH", "Prijenos gotovine"),
    PurposeCode::new("PENO", "Prisilna naplata"),
    PurposeCode::new("COMM", "Provizija"),
    PurposeCode::new("INSM", "Rata"),
    PurposeCode::new("ELEC", "Račun za električnu energiju"),
    PurposeCode::new("CBTV", "Račun za kabelsku TV"),
    PurposeCode::new("OTLC", "Račun za ostale telekom usluge"),
    PurposeCode::new("GASB", "Račun za plin"),
    PurposeCode::new("WTER", "Račun za vodu"),
    PurposeCode::new("ANNI", "Renta"),
    PurposeCode::new("BBSC", "Rodiljna naknada"),
    PurposeCode::new("NETT", "Saldiranje (netiranje)"),
    PurposeCode::new("CAFI", "Skrbničke naknade (interne)"),
    PurposeCode::new("STDY", "Studiranje"),
    PurposeCode::new("ROYA", "Tantijeme"),
    PurposeCode::new("PHON", "Telefonski račun"),
    PurposeCode::new("FERB", "Trajektni"),
    PurposeCode::new("DMEQ", "Trajna medicinska pomagala"),
    PurposeCode::new("WEBI", "Transakcija inicirana internetom"),
    PurposeCode::new("TELI", "Transakcija inicirana telefonom"),
    PurposeCode::new("HREC", "Transakcija se odnosi na doprinos poslodavca za troškove stanovanja"),
    PurposeCode::new("CBFR", "Transakcija se odnosi na kapitalnu štednju za mirovinu"),
    PurposeCode::new("CBFF", "Transakcija se odnosi na kapitalnu štednju, općenito"),
    PurposeCode::new("TRAD", "Trgovinske usluge"),
    PurposeCode::new("COST", "Troškovi"),
    PurposeCode::new("CPKC", "Troškovi parkiranja"),
    PurposeCode::new("TBIL", "Troškovi telekomunikacija"),
    PurposeCode::new("NWCH", "Troškovi za mrežu"),
    PurposeCode::new("EDUC", "Troškovi školovanja"),
    PurposeCode::new("LIMA", "Upravljanje likvidnošću"),
    PurposeCode::new("ACCT", "Upravljanje računom"),
    PurposeCode::new("ANTS", "Usluge anestezije"),
    PurposeCode::new("VIEW", "Usluge oftalmološke skrbi"),
    PurposeCode::new("LTCF", "Ustanova dugoročne zdravstvene skrbi"),
    PurposeCode::new("ICRF", "Ustanova socijalne skrbi"),
    PurposeCode::new("CVCF", "Ustanova za usluge skrbi za rekonvalescente"),
    PurposeCode::new("PTSP", "Uvjeti plaćanja"),
    PurposeCode::new("MSVC", "Višestruke vrste usluga"),
    PurposeCode::new("SECU", "Vrijednosni papiri"),
    PurposeCode::new("LOAN", "Zajam"),
    PurposeCode::new("FCPM", "Zakašnjele naknade"),
    PurposeCode::new("TRFD", "Zaklada"),
    PurposeCode::new("CDQC", "Zamjenska gotovina"),
    PurposeCode::new("HLTI", "Zdravstveno osiguranje"),
    PurposeCode::new("AIRB", "Zračni"),
    PurposeCode::new("DNTS", "Zubarske usluge"),
    PurposeCode::new("SAVG", "Štednja"),
    PurposeCode::new("RLWY", "Željeznički"),
    PurposeCode::new("LIFI", "Životno osiguranje"),
];
