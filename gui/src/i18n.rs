// Interface strings for both supported languages.
use shared::Language;

#[derive(Debug, PartialEq, Eq)]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tab_strategy: &'static str,
    pub tab_simulation: &'static str,
    pub market_sentiment: &'static str,
    pub volatility: &'static str,
    pub win_rate: &'static str,
    pub signal: &'static str,
    pub log_title: &'static str,
    pub log_empty: &'static str,
    pub processing: &'static str,
    pub live_title: &'static str,
    pub engine_title: &'static str,
    pub engine_desc: &'static str,
    pub presets_btn: &'static str,
    pub presets_filter: &'static str,
    pub presets_none: &'static str,
    pub style_label: &'static str,
    pub indicators_label: &'static str,
    pub min_indicators: &'static str,
    pub risk_label: &'static str,
    pub backtest_period: &'static str,
    pub start_date: &'static str,
    pub end_date: &'static str,
    pub safe: &'static str,
    pub aggressive: &'static str,
    pub notes_label: &'static str,
    pub notes_placeholder: &'static str,
    pub generate_btn: &'static str,
    pub regenerate_btn: &'static str,
    pub analyzing: &'static str,
    pub copy: &'static str,
    pub copied: &'static str,
    pub open_tv: &'static str,
    pub how_to: &'static str,
    pub status_ready: &'static str,
    pub select_prompt: &'static str,
    pub guide_title: &'static str,
    pub steps: [&'static str; 4],
    pub understood: &'static str,
    pub connecting: &'static str,
    pub halted_title: &'static str,
    pub halted_detail: &'static str,
}

const EN: Strings = Strings {
    title: "CALIX SANCTUS",
    subtitle: "ALGORITHMIC ARCHITECT",
    tab_strategy: "STRATEGY",
    tab_simulation: "SIMULATION",
    market_sentiment: "MARKET SENTIMENT",
    volatility: "VOLATILITY (ATR)",
    win_rate: "EST. WIN RATE",
    signal: "SIGNAL",
    log_title: "EXECUTION LOG",
    log_empty: "Awaiting signals...",
    processing: "PROCESSING DATA...",
    live_title: "CALIX SANCTUS LIVE",
    engine_title: "STRATEGY ENGINE",
    engine_desc: "Institutional grade Pine Script v5 architecture.",
    presets_btn: "PRESETS",
    presets_filter: "Filter presets...",
    presets_none: "No presets match.",
    style_label: "TRADING MODEL",
    indicators_label: "TECHNICAL INDICATORS",
    min_indicators: "Select min 2",
    risk_label: "RISK PROFILE",
    backtest_period: "BACKTEST PERIOD",
    start_date: "Start Date",
    end_date: "End Date",
    safe: "Conservative",
    aggressive: "Aggressive",
    notes_label: "ALGORITHM PARAMETERS (OPTIONAL)",
    notes_placeholder: "Ex: Target long positions only above 200 EMA, avoid trading during low volatility...",
    generate_btn: "COMPILE SYSTEM",
    regenerate_btn: "RECOMPILE SYSTEM",
    analyzing: "COMPILING ALGORITHM...",
    copy: "COPY CODE",
    copied: "COPIED",
    open_tv: "LAUNCH TRADINGVIEW",
    how_to: "INSTALL GUIDE",
    status_ready: "STATUS: DEPLOYMENT READY",
    select_prompt: "Define parameters or initiate auto-configuration sequence.",
    guide_title: "TradingView Integration",
    steps: [
        "Open TradingView and expand the Pine Editor panel.",
        "Clear any existing code.",
        "Paste the Calix Sanctus source code.",
        "Save and click 'Add to Chart'.",
    ],
    understood: "ACKNOWLEDGED",
    connecting: "ESTABLISHING ENGINE LINK...",
    halted_title: "SYSTEM HALTED",
    halted_detail: "CRITICAL ERROR: ENGINE UNAVAILABLE OR MISSING API_KEY. ACCESS DENIED.",
};

const TR: Strings = Strings {
    title: "CALIX SANCTUS",
    subtitle: "ALGORİTMİK MİMARİ",
    tab_strategy: "STRATEJİ",
    tab_simulation: "SİMÜLASYON",
    market_sentiment: "PİYASA ALGISI",
    volatility: "VOLATİLİTE (ATR)",
    win_rate: "TAHMİNİ BAŞARI",
    signal: "SİNYAL",
    log_title: "İŞLEM GÜNLÜĞÜ",
    log_empty: "Sinyal bekleniyor...",
    processing: "VERİ İŞLENİYOR...",
    live_title: "CALIX SANCTUS CANLI",
    engine_title: "STRATEJİ MOTORU",
    engine_desc: "Kurumsal seviyede Pine Script v5 mimarisi.",
    presets_btn: "HAZIR ŞABLONLAR",
    presets_filter: "Şablon ara...",
    presets_none: "Eşleşen şablon yok.",
    style_label: "TİCARET MODELİ",
    indicators_label: "TEKNİK GÖSTERGELER",
    min_indicators: "Min 2 seçim",
    risk_label: "RİSK PROFİLİ",
    backtest_period: "BACKTEST PERİYODU",
    start_date: "Başlangıç",
    end_date: "Bitiş",
    safe: "Muhafazakar",
    aggressive: "Agresif",
    notes_label: "ALGORİTMA PARAMETRELERİ (OPSİYONEL)",
    notes_placeholder: "Örn: Sadece 200 EMA üzerindeki long pozisyonları hedefle, volatilite düşükse işlem yapma...",
    generate_btn: "SİSTEMİ OLUŞTUR",
    regenerate_btn: "SİSTEMİ YENİLE",
    analyzing: "ALGORİTMA DERLENİYOR...",
    copy: "KOPYALA",
    copied: "KOPYALANDI",
    open_tv: "TRADINGVIEW'İ BAŞLAT",
    how_to: "KURULUM REHBERİ",
    status_ready: "DURUM: HAZIR",
    select_prompt: "Parametreleri belirleyin veya otomatik yapılandırmayı kullanın.",
    guide_title: "TradingView Entegrasyonu",
    steps: [
        "TradingView'i açın ve Pine Editor panelini genişletin.",
        "Mevcut kodları temizleyin.",
        "Calix Sanctus kodunu yapıştırın.",
        "Kaydet ve 'Grafiğe Ekle' butonuna tıklayın.",
    ],
    understood: "ANLAŞILDI",
    connecting: "MOTOR BAĞLANTISI KURULUYOR...",
    halted_title: "SİSTEM DURDURULDU",
    halted_detail: "KRİTİK HATA: MOTOR ERİŞİLEMEZ VEYA API_KEY EKSİK. ERİŞİM REDDEDİLDİ.",
};

pub fn strings(lang: Language) -> &'static Strings {
    match lang {
        Language::En => &EN,
        Language::Tr => &TR,
    }
}
