//! Localized message catalog.
//!
//! All validation and UI text goes through [`Messages::get`]. Lookup falls
//! back to English for untranslated entries, then to the key itself so a
//! missing entry never panics at render time.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Supported storefront locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Case-insensitive parse, tolerant of region tags (`ar-EG` is `Ar`).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.split(['-', '_']).next().unwrap_or("") {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }
}

// (key, english, arabic) triples; an empty translation falls back to English.
const MESSAGES: &[(&str, &str, &str)] = &[
    ("username", "Username", "اسم المستخدم"),
    ("username-required", "Username is required", "اسم المستخدم مطلوب"),
    (
        "username-min",
        "Username must be at least 2 characters",
        "يجب أن يتكون اسم المستخدم من حرفين على الأقل",
    ),
    ("password", "Password", "كلمة المرور"),
    ("password-required", "Password is required", "كلمة المرور مطلوبة"),
    (
        "password-invalid",
        "Password must be at least 8 characters with uppercase and lowercase letters",
        "يجب أن تتكون كلمة المرور من 8 أحرف على الأقل وتتضمن حروفًا كبيرة وصغيرة",
    ),
    ("register-firstname", "First name", "الاسم الأول"),
    ("firstname-required", "First name is required", "الاسم الأول مطلوب"),
    (
        "firstname-min",
        "First name must be at least 2 characters",
        "يجب أن يتكون الاسم الأول من حرفين على الأقل",
    ),
    ("register-lastname", "Last name", "اسم العائلة"),
    ("lastname-required", "Last name is required", "اسم العائلة مطلوب"),
    (
        "lastname-min",
        "Last name must be at least 2 characters",
        "يجب أن يتكون اسم العائلة من حرفين على الأقل",
    ),
    ("email", "Email", "البريد الإلكتروني"),
    ("email-required", "Email is required", "البريد الإلكتروني مطلوب"),
    ("email-invalid", "Enter a valid email address", "أدخل بريدًا إلكترونيًا صالحًا"),
    ("register-password-confirm", "Confirm password", "تأكيد كلمة المرور"),
    (
        "password-confirm-required",
        "Password confirmation is required",
        "تأكيد كلمة المرور مطلوب",
    ),
    (
        "password-confirm-mismatch",
        "Passwords do not match",
        "كلمتا المرور غير متطابقتين",
    ),
    ("login", "Login", "تسجيل الدخول"),
    ("login-title", "Sign in to your account", "تسجيل الدخول إلى حسابك"),
    ("register-submit", "Create account", "إنشاء حساب"),
    ("register-title", "Create a new account", "إنشاء حساب جديد"),
    (
        "fallback-error-message",
        "Something went wrong, please try again",
        "حدث خطأ ما، يرجى المحاولة مرة أخرى",
    ),
    ("register-success-title", "Account created", "تم إنشاء الحساب"),
    (
        "register-success",
        "You can now log in with your new account",
        "يمكنك الآن تسجيل الدخول بحسابك الجديد",
    ),
    ("home-title", "Storefront", "المتجر"),
    (
        "home-menu",
        "1: login, 2: register, 3: products, q: quit",
        "1: تسجيل الدخول، 2: إنشاء حساب، 3: المنتجات، q: خروج",
    ),
    ("home-invalid", "Unknown choice", "خيار غير معروف"),
    ("dashboard-title", "Products", "المنتجات"),
    ("dashboard-empty", "No products found", "لا توجد منتجات"),
    (
        "dashboard-nav",
        "n: next page, p: previous page, q: back",
        "n: الصفحة التالية، p: الصفحة السابقة، q: رجوع",
    ),
    ("catalog-error", "Could not load products", "تعذر تحميل المنتجات"),
    ("price-currency", "EGP", "ج.م"),
    ("in-stock", "in stock", "متوفر"),
];

static CATALOG: Lazy<HashMap<&'static str, [&'static str; 2]>> =
    Lazy::new(|| MESSAGES.iter().map(|(key, en, ar)| (*key, [*en, *ar])).collect());

/// Message lookup resolved once per locale; treat as a pure `key -> string`
/// function.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn get<'k>(&self, key: &'k str) -> &'k str {
        match CATALOG.get(key) {
            Some(&[en, ar]) => match self.locale {
                Locale::En => en,
                Locale::Ar => {
                    if ar.is_empty() {
                        en
                    } else {
                        ar
                    }
                }
            },
            None => key,
        }
    }
}
