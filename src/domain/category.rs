/// Site classification derived from the normalized header and footer marker
/// pair. Both sides must match the same row; anything else is `Others`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SiteCategory {
    DigitalLiteracy,
    PugetSound,
    RacialEquity,
    Teals,
    MicrosoftUnified,
    PremierSupport,
    About,
    Accessibility,
    CorporateResponsibility,
    Elections,
    Nonprofits,
    Others,
}

impl SiteCategory {
    pub fn from_markers(header: &str, footer: &str) -> Self {
        match (header, footer) {
            ("MSDigitalLiteracyRedTigerHeader", "MSDigitalLiteracyFooter") => Self::DigitalLiteracy,
            ("MSPugetSoundHeader", "MSPugetSoundFooter") => Self::PugetSound,
            ("MSRacialEquityHeader", "MSRacialEquityFooter") => Self::RacialEquity,
            ("MSTealsHeader", "MSTealsFooter") => Self::Teals,
            ("MSMicrosoftUnifiedHeader", "MSMicrosoftUnifiedFooter") => Self::MicrosoftUnified,
            ("mshomeheader", "mshomefooter") => Self::PremierSupport,
            ("MSAboutHeader-w-Nav", "MSaboutFooter") => Self::About,
            ("msaccessibilityheader", "msaccessibilityfooter") => Self::Accessibility,
            ("MSCorporateResponsibilityHeader3", "MSCorporateResponsibilityFooter") => {
                Self::CorporateResponsibility
            }
            ("MSElectionsHeader", "MSElectionsFooter") => Self::Elections,
            ("MSNonprofitsHeader", "MSNonProfitsFooter") => Self::Nonprofits,
            _ => Self::Others,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DigitalLiteracy => "Digital Literacy",
            Self::PugetSound => "Puget Sound",
            Self::RacialEquity => "REI",
            Self::Teals => "TEALS",
            Self::MicrosoftUnified => "Microsoft Unified",
            Self::PremierSupport => "Premier Support",
            Self::About => "About",
            Self::Accessibility => "Accessibility",
            Self::CorporateResponsibility => "CSR",
            Self::Elections => "CSR > Elections",
            Self::Nonprofits => "Nonprofits",
            Self::Others => "Others",
        }
    }
}
