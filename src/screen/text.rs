//! Localized UI strings.
//!
//! The product ships Arabic-first with an English fallback. Menus,
//! prompts and alerts go through [`Translations`]; tabular output keeps
//! English column headers. Every alert here maps to a caught error, the
//! screens never crash on backend failures.

use crate::domain::Language;

/// One language's worth of UI strings.
#[derive(Debug)]
pub struct Translations {
    pub app_title: &'static str,

    // Menu entries
    pub menu_generate: &'static str,
    pub menu_saved: &'static str,
    pub menu_domain: &'static str,
    pub menu_logo: &'static str,
    pub menu_language: &'static str,
    pub menu_quit: &'static str,

    // Prompts
    pub prompt_kind: &'static str,
    pub prompt_keywords: &'static str,
    pub prompt_sector: &'static str,
    pub prompt_location: &'static str,
    pub prompt_personality: &'static str,
    pub prompt_length: &'static str,
    pub prompt_count: &'static str,
    pub prompt_company_name: &'static str,
    pub prompt_domain_name: &'static str,
    pub prompt_save_choice: &'static str,
    pub prompt_pick_name: &'static str,
    pub prompt_pick_saved: &'static str,
    pub prompt_render_image: &'static str,

    // Shared menu items
    pub action_favorite: &'static str,
    pub action_delete: &'static str,
    pub back: &'static str,
    pub skip: &'static str,

    // Alerts
    pub generation_failed: &'static str,
    pub domain_check_failed: &'static str,
    pub logo_failed: &'static str,
    pub save_failed: &'static str,
    pub load_failed: &'static str,
    pub not_found: &'static str,

    // Confirmations and empty states
    pub name_saved: &'static str,
    pub name_deleted: &'static str,
    pub favorite_added: &'static str,
    pub favorite_removed: &'static str,
    pub language_updated: &'static str,
    pub logo_saved: &'static str,
    pub no_results: &'static str,
    pub no_saved_names: &'static str,

    // Domain rows
    pub available: &'static str,
    pub taken: &'static str,

    // Logo session
    pub reward_earned: &'static str,
    pub reward_skipped: &'static str,
}

pub const AR: Translations = Translations {
    app_title: "مولد أسماء الشركات",

    menu_generate: "توليد أسماء",
    menu_saved: "الأسماء المحفوظة",
    menu_domain: "فحص النطاقات",
    menu_logo: "تصميم الشعار",
    menu_language: "اللغة",
    menu_quit: "خروج",

    prompt_kind: "اختر طريقة التوليد",
    prompt_keywords: "كلمات مفتاحية (اختياري، مفصولة بفواصل)",
    prompt_sector: "قطاع الشركة",
    prompt_location: "الموقع أو المدينة",
    prompt_personality: "شخصية العلامة التجارية",
    prompt_length: "طول الاسم المطلوب",
    prompt_count: "عدد الأسماء",
    prompt_company_name: "اسم الشركة",
    prompt_domain_name: "الاسم المراد فحصه",
    prompt_save_choice: "هل تريد حفظ أحد الأسماء؟",
    prompt_pick_name: "اختر الاسم",
    prompt_pick_saved: "اختر اسماً",
    prompt_render_image: "هل تريد توليد صورة الشعار؟",

    action_favorite: "تبديل المفضلة",
    action_delete: "حذف",
    back: "رجوع",
    skip: "تخطي",

    generation_failed: "فشل توليد الأسماء",
    domain_check_failed: "فشل فحص النطاق",
    logo_failed: "فشل إنشاء الشعار",
    save_failed: "تعذر حفظ الاسم",
    load_failed: "تعذر تحميل الأسماء المحفوظة",
    not_found: "الاسم غير موجود",

    name_saved: "تم حفظ الاسم",
    name_deleted: "تم حذف الاسم",
    favorite_added: "تمت الإضافة إلى المفضلة",
    favorite_removed: "تمت الإزالة من المفضلة",
    language_updated: "تم تغيير اللغة",
    logo_saved: "تم حفظ الشعار في",
    no_results: "لا توجد نتائج بعد",
    no_saved_names: "لا توجد أسماء محفوظة",

    available: "متاح",
    taken: "محجوز",

    reward_earned: "شكراً للمشاهدة! جاري إنشاء الشعار",
    reward_skipped: "لا يوجد إعلان متاح، جاري إنشاء الشعار",
};

pub const EN: Translations = Translations {
    app_title: "Business Name Generator",

    menu_generate: "Generate names",
    menu_saved: "Saved names",
    menu_domain: "Domain check",
    menu_logo: "Logo design",
    menu_language: "Language",
    menu_quit: "Quit",

    prompt_kind: "Pick a generation method",
    prompt_keywords: "Keywords (optional, comma separated)",
    prompt_sector: "Business sector",
    prompt_location: "Location or city",
    prompt_personality: "Brand personality",
    prompt_length: "Desired name length",
    prompt_count: "How many names",
    prompt_company_name: "Company name",
    prompt_domain_name: "Name to check",
    prompt_save_choice: "Save one of the names?",
    prompt_pick_name: "Pick a name",
    prompt_pick_saved: "Pick a saved name",
    prompt_render_image: "Render the logo image?",

    action_favorite: "Toggle favorite",
    action_delete: "Delete",
    back: "Back",
    skip: "Skip",

    generation_failed: "Name generation failed",
    domain_check_failed: "Domain check failed",
    logo_failed: "Logo generation failed",
    save_failed: "Could not save the name",
    load_failed: "Could not load saved names",
    not_found: "Name not found",

    name_saved: "Name saved",
    name_deleted: "Name deleted",
    favorite_added: "Added to favorites",
    favorite_removed: "Removed from favorites",
    language_updated: "Language updated",
    logo_saved: "Logo image saved to",
    no_results: "No results yet",
    no_saved_names: "No saved names yet",

    available: "available",
    taken: "taken",

    reward_earned: "Thanks for watching! Generating your logo",
    reward_skipped: "No ad available, generating your logo",
};

impl Translations {
    /// Strings for the given UI language.
    #[must_use]
    pub const fn for_language(language: Language) -> &'static Translations {
        match language {
            Language::Ar => &AR,
            Language::En => &EN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_arabic() {
        let strings = Translations::for_language(Language::default());
        assert_eq!(strings.app_title, AR.app_title);
    }

    #[test]
    fn test_languages_resolve_to_distinct_tables() {
        assert_ne!(
            Translations::for_language(Language::Ar).menu_generate,
            Translations::for_language(Language::En).menu_generate
        );
    }
}
