use crate::types::{Item, ItemKind, ItemStatus, ItemSubject};
use soroban_sdk::{Env, String, Vec};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=200&width=400";

/// (id, title, subject, category, start date, participants, description, positive, negative, status)
type SeedRow = (
    u32,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    u32,
    &'static str,
    u32,
    u32,
    ItemStatus,
);

const BOYCOTTS: [SeedRow; 14] = [
    (1, "Hızlı Moda Boykotu", "Çeşitli Giyim Markaları", "Tüketim", "10.03.2023", 12500,
        "Kötü çalışma koşulları ve çevresel zararlarıyla bilinen hızlı moda markalarına karşı boykot.",
        2800, 445, ItemStatus::Active),
    (2, "Teknoloji Devi Veri Gizliliği", "Büyük Teknoloji Şirketi", "Teknoloji", "22.04.2023", 8700,
        "Veri gizliliği ihlalleri ve gözetleme uygulamaları nedeniyle büyük bir teknoloji şirketine karşı boykot.",
        1900, 287, ItemStatus::Active),
    (3, "Sürdürülebilir Gıda Hareketi", "Gıda Şirketi", "Market", "15.02.2023", 5300,
        "Zararlı pestisitler ve sürdürülemez tarım uygulamaları kullanan gıda şirketlerine karşı boykot.",
        1200, 367, ItemStatus::PendingApproval),
    (4, "Adil Ücret Kampanyası", "Perakende Zinciri", "Tüketim", "01.05.2023", 9200,
        "Çalışanlarına adil ücret ve haklar sağlamayan perakende zincirlerine karşı boykot.",
        2500, 376, ItemStatus::Active),
    (5, "Plastik Ambalaja Karşı", "Tüketici Ürünleri Şirketleri", "Tüketim", "20.01.2023", 7500,
        "Ürünlerinde aşırı plastik ambalaj kullanan şirketlere karşı boykot.",
        1700, 245, ItemStatus::Active),
    (6, "Temiz Enerji Savunuculuğu", "Fosil Yakıt Şirketleri", "Akaryakıt", "05.06.2023", 11000,
        "Fosil yakıtlara yoğun yatırım yapan ve temiz enerji girişimlerine karşı çıkan şirketlere karşı boykot.",
        2900, 223, ItemStatus::PendingApproval),
    (101, "Tartışmalı Açıklamalar", "Ünlü Oyuncu", "Oyuncular", "15.04.2023", 8500,
        "Tartışmalı politik açıklamaları nedeniyle ünlü bir oyuncuya karşı boykot.",
        1800, 445, ItemStatus::Active),
    (102, "Çevresel Tutarsızlık", "Ünlü Şarkıcı", "Müzisyenler", "22.05.2023", 6700,
        "Çevre savunuculuğu yaparken özel jetle seyahat eden ünlü şarkıcıya karşı boykot.",
        1500, 487, ItemStatus::Active),
    (103, "Hayran Kitlesi Protestosu", "Pop Yıldızı", "Müzisyenler", "10.06.2023", 7200,
        "Bilet fiyatlarındaki aşırı artış ve hayranlarına karşı tutumları nedeniyle ünlü pop yıldızına karşı boykot.",
        2100, 320, ItemStatus::Active),
    (104, "Sosyal Medya Etiği", "Ünlü Fenomen", "Fenomenler", "05.05.2023", 5500,
        "Yanıltıcı içerikler ve etik olmayan reklam anlaşmaları nedeniyle popüler sosyal medya fenomenine karşı boykot.",
        1650, 410, ItemStatus::Active),
    (105, "Moda Tasarımcısı Tartışması", "Ünlü Tasarımcı", "Tasarımcılar", "12.04.2023", 4800,
        "Ayrımcı açıklamaları ve tartışmalı koleksiyonu nedeniyle ünlü moda tasarımcısına karşı boykot kampanyası.",
        1250, 380, ItemStatus::Active),
    (106, "Spor Yıldızı Protestosu", "Dünyaca Ünlü Sporcu", "Sporcular", "18.03.2023", 9300,
        "Tartışmalı sponsorluk anlaşmaları ve politik duruşu nedeniyle dünyaca ünlü sporcuya karşı başlatılan boykot.",
        2750, 520, ItemStatus::Active),
    (107, "Medya Figürü Eylemsizliği", "Tanınmış Sunucu", "Medya", "07.02.2023", 6200,
        "Önemli toplumsal konularda sessiz kalması ve taraflı yayın politikası nedeniyle tanınmış medya figürüne karşı boykot.",
        1850, 290, ItemStatus::Active),
    (108, "Politik Figür Boykotu", "Eski Siyasetçi", "Politikacılar", "14.01.2023", 10500,
        "Görev süresi boyunca aldığı tartışmalı kararlar ve söylemleri nedeniyle eski siyasetçiye karşı boykot hareketi.",
        3200, 680, ItemStatus::Active),
];

const PROTESTS: [SeedRow; 6] = [
    (1, "Üniversite Harç Protestosu", "İstanbul", "Eğitim", "15.05.2023", 2500,
        "Öğrenciler, büyük üniversitelerdeki artan harç ücretlerine karşı protesto düzenliyor.",
        1100, 145, ItemStatus::Active),
    (2, "Çevre Koruma Mitingi", "Ankara", "Çevre", "22.06.2023", 1800,
        "Vatandaşlar, ormansızlaşma ve çevresel tahribata karşı miting düzenliyor.",
        900, 87, ItemStatus::Active),
    (3, "İşçi Hakları Yürüyüşü", "İzmir", "İşçi Hakları", "10.07.2023", 3200,
        "İşçi sendikaları daha iyi çalışma koşulları ve adil ücretler için yürüyüş düzenliyor.",
        1400, 167, ItemStatus::Active),
    (4, "Medya Özgürlüğü Gösterisi", "İstanbul", "Medya", "05.08.2023", 1500,
        "Gazeteciler ve vatandaşlar basın özgürlüğü için ve sansüre karşı gösteri düzenliyor.",
        750, 126, ItemStatus::PendingApproval),
    (5, "Kadın Hakları Yürüyüşü", "Ankara", "İnsan Hakları", "08.03.2023", 5000,
        "Kadın hakları ve eşitlik için düzenlenen yıllık yürüyüş.",
        2100, 245, ItemStatus::Active),
    (6, "Dijital Haklar Farkındalığı", "Çevrimiçi/İstanbul", "Teknoloji", "12.09.2023", 5000,
        "Dijital gizlilik hakları ve gözetlemeye karşı kampanya.",
        1000, 123, ItemStatus::Active),
];

/// The catalogue a fresh deployment starts with
pub fn default_items(env: &Env, kind: ItemKind) -> Vec<Item> {
    let rows: &[SeedRow] = match kind {
        ItemKind::Boycott => &BOYCOTTS,
        ItemKind::Protest => &PROTESTS,
    };

    let mut items = Vec::new(env);
    for &(id, title, subject, category, start_date, participants, description, positive, negative, status) in rows {
        let subject = String::from_str(env, subject);
        items.push_back(Item {
            id,
            title: String::from_str(env, title),
            description: String::from_str(env, description),
            category: String::from_str(env, category),
            start_date: String::from_str(env, start_date),
            end_date: None,
            participants,
            positive_votes: positive,
            negative_votes: negative,
            status,
            image: Some(String::from_str(env, PLACEHOLDER_IMAGE)),
            creator: None,
            tags: Vec::new(env),
            subject: match kind {
                ItemKind::Boycott => ItemSubject::Target(subject),
                ItemKind::Protest => ItemSubject::Location(subject),
            },
        });
    }
    items
}
