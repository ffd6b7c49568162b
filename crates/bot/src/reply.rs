//! Outgoing replies and their texts.

use bokfinder_catalogue::Product;

/// A URL button shown under a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub url: String,
}

impl InlineButton {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// One outgoing chat message.
///
/// `buttons` is a list of rows; an empty list means no keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub buttons: Vec<Vec<InlineButton>>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            buttons: Vec::new(),
        }
    }

    pub fn has_buttons(&self) -> bool {
        self.buttons.iter().any(|row| !row.is_empty())
    }
}

pub const WELCOME: &str = "📚 Selamat datang di BokFinderBot! Saya adalah bot pencari Ebook & Buku. \
Cari Ebook apa yang Anda butuhkan? Ketikkan judul atau topik yang Anda inginkan, \
dan saya akan mencarikannya untuk Anda.";

pub const REVIEW_USAGE: &str = "⚠️ Mohon berikan judul lengkap buku untuk mendapatkan link ulasannya.\n\
Contoh penggunaan: /ulasan Judul Buku";

pub const PRODUCT_NOT_FOUND: &str = "⚠️ Produk tidak ditemukan.";

pub fn welcome() -> Reply {
    Reply::text(WELCOME)
}

pub fn help(review_submit_url: &str) -> Reply {
    let text = [
        "ℹ️ Gunakan bot ini untuk mencari Ebook & Buku. Anda cukup ketik judul atau topik yang ingin Anda cari, dan saya akan mencarikannya untuk Anda.",
        "",
        "🔍 Contoh penggunaan:",
        "Ketikkan \"Belajar Python\" untuk mencari Ebook atau Buku tentang pemrograman Python.",
        "Ketikkan \"Hacking\" untuk mencari Ebook atau Buku tentang hacking.",
        "",
        "📖 Anda juga bisa menggunakan perintah:",
        "/ulasan [nama lengkap produk] untuk mendapatkan link ulasan produk tersebut.",
        "",
        "⚠️ Perhatian: Judul harus sesuai, perhatikan huruf besar dan kecilnya agar mendapatkan link ulasan.",
        "",
        "📘 Contoh penggunaan:",
        "/ulasan Ilmu Hacking ",
        "untuk mendapatkan link ulasan buku Ilmu Hacking.",
        "",
        "📝 Catatan:",
        "Kamu juga bisa memberikan ulasan di sini:",
        review_submit_url,
    ]
    .join("\n");
    Reply::text(text)
}

pub fn review_usage() -> Reply {
    Reply::text(REVIEW_USAGE)
}

pub fn review_found(product_name: &str, url: &str) -> Reply {
    Reply::text(format!("📘 Link ulasan untuk {product_name}:\n{url}"))
}

pub fn review_missing(product_name: &str, review_submit_url: &str) -> Reply {
    Reply::text(format!(
        "⚠️ Link ulasan untuk {product_name} tidak ditemukan.\n\
         Kamu bisa memberikan ulasan di sini: {review_submit_url}"
    ))
}

/// Product card: title, one line per link, and one button row per link.
pub fn product(product: &Product) -> Reply {
    let mut text = format!("\n\n📖 Judul: {}", product.name());
    let mut buttons = Vec::with_capacity(product.links().len());

    for (label, url) in product.links().iter() {
        text.push_str(&format!("\n🔗 {label}: {url}"));
        buttons.push(vec![InlineButton::new(label, url)]);
    }

    Reply { text, buttons }
}

pub fn product_not_found() -> Reply {
    Reply::text(PRODUCT_NOT_FOUND)
}
