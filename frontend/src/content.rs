//! Static page content. Everything here is compiled in and never mutated.

use crate::components::icon::Icon;

pub const SITE_TITLE: &str = "Papatya Taksi - Çayırova / Kocaeli";
pub const SITE_DESCRIPTION: &str =
    "Papatya Taksi - 7/24 Hizmetinizdeyiz. Emek, Çayırova/Kocaeli. Güvenli ve konforlu ulaşım hizmeti.";
pub const BUSINESS_NAME: &str = "Çayırova Papatya Taksi";
pub const COPYRIGHT: &str = "© 2026 Çayırova Papatya Taksi. Tüm hakları saklıdır.";

pub const SECTION_HOME: &str = "home";
pub const SECTION_LOCATION: &str = "konum";
pub const SECTION_SERVICES: &str = "hizmetler";
pub const SECTION_GALLERY: &str = "galeri";
pub const SECTION_REVIEWS: &str = "yorumlar";
pub const SECTION_CONTACT: &str = "iletisim";

/// Section ids in the order the page renders them.
pub const RENDERED_SECTIONS: [&str; 6] = [
    SECTION_HOME,
    SECTION_LOCATION,
    SECTION_SERVICES,
    SECTION_GALLERY,
    SECTION_REVIEWS,
    SECTION_CONTACT,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationItem {
    pub label: &'static str,
    pub target_section_id: &'static str,
}

pub const NAV_ITEMS: [NavigationItem; 6] = [
    NavigationItem { label: "Ana Sayfa", target_section_id: SECTION_HOME },
    NavigationItem { label: "Konum", target_section_id: SECTION_LOCATION },
    NavigationItem { label: "Hizmetler", target_section_id: SECTION_SERVICES },
    NavigationItem { label: "Galeri", target_section_id: SECTION_GALLERY },
    NavigationItem { label: "Yorumlar", target_section_id: SECTION_REVIEWS },
    NavigationItem { label: "İletişim", target_section_id: SECTION_CONTACT },
];

/// Looks up a navigation target, used to honour `#fragment` deep links.
pub fn find_section(id: &str) -> Option<&'static str> {
    NAV_ITEMS
        .iter()
        .map(|item| item.target_section_id)
        .find(|target| *target == id)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub author_name: &'static str,
    /// Star count, 1 to 5.
    pub rating: u8,
    pub text: &'static str,
    pub relative_date: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        author_name: "Ahmet Y.",
        rating: 5,
        text: "Çok hızlı geldiler, sürücü çok kibardı. Kesinlikle tavsiye ederim!",
        relative_date: "2 hafta önce",
    },
    Testimonial {
        author_name: "Fatma K.",
        rating: 5,
        text: "Gece vakti bile 10 dakika içinde geldiler. Güvenilir hizmet.",
        relative_date: "1 ay önce",
    },
    Testimonial {
        author_name: "Mehmet S.",
        rating: 5,
        text: "Araçlar temiz ve konforluydu. Fiyatlar da çok uygun.",
        relative_date: "3 hafta önce",
    },
    Testimonial {
        author_name: "Ayşe B.",
        rating: 5,
        text: "Düzenli olarak kullanıyorum, hiçbir sorun yaşamadım. Teşekkürler!",
        relative_date: "1 hafta önce",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhoneNumber {
    pub number: &'static str,
    pub label: &'static str,
}

impl PhoneNumber {
    pub fn href(&self) -> String {
        tel_href(self.number)
    }
}

pub const PHONE_NUMBERS: [PhoneNumber; 3] = [
    PhoneNumber { number: "0507 117 35 00", label: "Telefon 1" },
    PhoneNumber { number: "0507 127 35 00", label: "Telefon 2" },
    PhoneNumber { number: "0262 641 35 00", label: "Sabit Hat" },
];

/// The number behind every "call now" button.
pub const PRIMARY_PHONE: PhoneNumber = PHONE_NUMBERS[0];

pub const EMAIL: &str = "taksipapatya@gmail.com";

pub const ADDRESS_LINES: [&str; 2] = ["Emek, 62/6. Sk.,", "41420 Çayırova/Kocaeli"];

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d6018.718664058679!2d29.412!3d40.8222!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x14cadf003389b7dd%3A0x7c77ad6d9e260f45!2sPapatya%20taksi!5e0!3m2!1str!2str!4v1708531200000!5m2!1str!2str";
pub const MAP_PLACE_URL: &str = "https://www.google.com/maps/place/Papatya+taksi/@40.8218297,29.4115074,19z/data=!4m6!3m5!1s0x14cadf003389b7dd:0x7c77ad6d9e260f45!8m2!3d40.8221571!4d29.4118746!16s%2Fg%2F11ybzmh5qk?entry=ttu";
pub const REVIEW_URL: &str = "https://www.google.com/maps/place/Papatya+taksi/@40.8218297,29.4115074,19z/data=!4m6!3m5!1s0x14cadf003389b7dd:0x7c77ad6d9e260f45!8m2!3d40.8221571!4d29.4118746!16s%2Fg%2F11ybzmh5qk?entry=ttu&g_ep=EgoyMDI2MDIxOC4wIKXMDSoASAFQAw%3D%3D";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 3] = [
    Service {
        icon: Icon::Clock,
        title: "7/24 Hizmet",
        description: "Günün her saati, haftanın her günü hizmetinizdeyiz. Gece veya gündüz fark etmeksizin yanınızdayız.",
    },
    Service {
        icon: Icon::Shield,
        title: "Güvenli Yolculuk",
        description: "Deneyimli ve profesyonel sürücülerimizle güvenli bir yolculuk deneyimi sunuyoruz.",
    },
    Service {
        icon: Icon::Star,
        title: "Konforlu Araçlar",
        description: "Modern ve bakımlı araçlarımızla konforlu bir yolculuk garantisi veriyoruz.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const GALLERY_IMAGES: [GalleryImage; 5] = [
    GalleryImage { src: "/images/papatya-taksi-1.jpg", alt: "Çayırova Papatya Taksi Durağı - Gece Görünümü" },
    GalleryImage { src: "/images/papatya-taksi-2.jpg", alt: "Çayırova Papatya Taksi Durağı - Yan Açı" },
    GalleryImage { src: "/images/papatya-taksi-3.jpg", alt: "Çayırova Papatya Taksi Durağı - Gündüz Görünümü" },
    GalleryImage { src: "/images/kart.jpg", alt: "Çayırova Papatya Taksi - Kartvizit" },
    GalleryImage { src: "/images/galeri-eklenecek.jpg", alt: "Çayırova Papatya Taksi - Galeri" },
];

/// `tel:` link for a display-formatted number. All whitespace is dropped.
pub fn tel_href(number: &str) -> String {
    let digits: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}

pub fn mailto_href(address: &str) -> String {
    let address: String = address.chars().filter(|c| !c.is_whitespace()).collect();
    format!("mailto:{}", address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn navigation_has_six_distinct_targets() {
        assert_eq!(NAV_ITEMS.len(), 6);
        let targets: HashSet<_> = NAV_ITEMS.iter().map(|item| item.target_section_id).collect();
        assert_eq!(targets.len(), 6);
    }

    #[test]
    fn every_navigation_target_matches_exactly_one_section() {
        for item in NAV_ITEMS.iter() {
            let matches = RENDERED_SECTIONS
                .iter()
                .filter(|id| **id == item.target_section_id)
                .count();
            assert_eq!(matches, 1, "{} should name one section", item.target_section_id);
        }
    }

    #[test]
    fn navigation_order_follows_page_order() {
        let targets: Vec<_> = NAV_ITEMS.iter().map(|item| item.target_section_id).collect();
        assert_eq!(targets, RENDERED_SECTIONS.to_vec());
        assert_eq!(NAV_ITEMS[5].label, "İletişim");
    }

    #[test]
    fn find_section_only_knows_declared_ids() {
        assert_eq!(find_section("galeri"), Some("galeri"));
        assert_eq!(find_section("Galeri"), None);
        assert_eq!(find_section(""), None);
    }

    #[test]
    fn testimonials_have_valid_ratings() {
        assert_eq!(TESTIMONIALS.len(), 4);
        assert_eq!(TESTIMONIALS[0].author_name, "Ahmet Y.");
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn tel_href_strips_whitespace() {
        assert_eq!(tel_href("0507 117 35 00"), "tel:05071173500");
        assert_eq!(tel_href("0262\t641 35 00"), "tel:02626413500");
        assert_eq!(PRIMARY_PHONE.href(), "tel:05071173500");
        for phone in PHONE_NUMBERS.iter() {
            assert!(!phone.href().contains(char::is_whitespace));
        }
    }

    #[test]
    fn mailto_href_uses_contact_address() {
        assert_eq!(mailto_href(EMAIL), "mailto:taksipapatya@gmail.com");
    }
}
