//! Built-in locale strings shipped with the app.
//!
//! Every locale carries the same key set. Keys are dotted `section.name`
//! identifiers; values are display text with no markup.

/// Japanese strings ("ja")
pub const JAPANESE_STRINGS: &[(&str, &str)] = &[
    // app
    ("app.title", "HyMatch"),
    ("app.subtitle", "理想のアルバイトを見つけよう"),

    // common
    ("common.menu", "メニュー"),

    // tabs
    ("tabs.jobs", "お仕事"),
    ("tabs.refused", "見送り"),
    ("tabs.chosen", "応募済み"),
    ("tabs.profile", "プロフィール"),

    // contact
    ("contact.title", "お問い合わせ"),
    ("contact.phone", "電話"),
    ("contact.email", "メール"),
    ("contact.chat", "チャット"),
    ("contact.subtitle", "サポートチームにお気軽にお問い合わせください"),
    ("contact.phoneDetail", "月-金 9:00-18:00"),
    ("contact.emailDetail", "24時間以内に返信"),
    ("contact.chatDetail", "24時間対応"),

    // profile
    ("profile.incomplete", "プロフィールが未完成です"),
    ("profile.complete", "プロフィールを完成させる"),
    ("profile.edit", "プロフィール編集"),
    ("profile.basicInfo", "基本情報"),
    ("profile.contactInfo", "連絡先情報"),
    ("profile.workPreferences", "勤務希望"),
    ("profile.firstName", "名前"),
    ("profile.lastName", "苗字"),
    ("profile.age", "年齢"),
    ("profile.gender", "性別"),
    ("profile.nationality", "国籍"),
    ("profile.email", "メールアドレス"),
    ("profile.phone", "電話番号"),
    ("profile.japaneseLevel", "日本語レベル"),
    ("profile.preferredDays", "希望勤務日"),
    ("profile.preferredJobTypes", "希望職種"),
    ("profile.addPhoto", "写真を追加"),
    ("profile.save", "プロフィールを保存"),
    ("profile.male", "男性"),
    ("profile.female", "女性"),
    ("profile.other", "その他"),

    // filter
    ("filter.title", "フィルター"),
    ("filter.jobType", "職種"),
    ("filter.wage", "時給"),
    ("filter.japanese", "日本語レベル"),
    ("filter.workDays", "勤務日"),
    ("filter.reset", "リセット"),
    ("filter.apply", "フィルターを適用"),

    // sort
    ("sort.wage", "時給順"),
    ("sort.commute", "通勤時間順"),
    ("sort.date", "投稿日順"),
    ("sort.title", "並び替え"),

    // empty
    ("empty.chosen", "まだ応募した求人がありません"),
    ("empty.chosenSub", "いいねした求人がここに表示されます"),
    ("empty.refused", "まだ見送った求人がありません"),
    ("empty.refusedSub", "パスした求人がここに表示されます"),

    // language
    ("language.select", "言語を選択"),
];

/// English strings ("en")
pub const ENGLISH_STRINGS: &[(&str, &str)] = &[
    // app
    ("app.title", "HyMatch"),
    ("app.subtitle", "Find Your Perfect Part-Time Job"),

    // common
    ("common.menu", "Menu"),

    // tabs
    ("tabs.jobs", "Jobs"),
    ("tabs.refused", "Refused"),
    ("tabs.chosen", "Chosen"),
    ("tabs.profile", "Profile"),

    // contact
    ("contact.title", "Contact Us"),
    ("contact.phone", "Phone"),
    ("contact.email", "Email"),
    ("contact.chat", "Live Chat"),
    ("contact.subtitle", "Need help? Get in touch with our support team."),
    ("contact.phoneDetail", "Mon-Fri 9:00-18:00"),
    ("contact.emailDetail", "Response within 24 hours"),
    ("contact.chatDetail", "Available 24/7"),

    // profile
    ("profile.incomplete", "Profile is incomplete"),
    ("profile.complete", "Complete Profile"),
    ("profile.edit", "Edit Profile"),
    ("profile.basicInfo", "Basic Information"),
    ("profile.contactInfo", "Contact Information"),
    ("profile.workPreferences", "Work Preferences"),
    ("profile.firstName", "First Name"),
    ("profile.lastName", "Last Name"),
    ("profile.age", "Age"),
    ("profile.gender", "Gender"),
    ("profile.nationality", "Nationality"),
    ("profile.email", "Email"),
    ("profile.phone", "Phone"),
    ("profile.japaneseLevel", "Japanese Level"),
    ("profile.preferredDays", "Preferred Work Days"),
    ("profile.preferredJobTypes", "Preferred Job Types"),
    ("profile.addPhoto", "Add Photo"),
    ("profile.save", "Save Profile"),
    ("profile.male", "Male"),
    ("profile.female", "Female"),
    ("profile.other", "Other"),

    // filter
    ("filter.title", "Filter"),
    ("filter.jobType", "Job Type"),
    ("filter.wage", "Wage"),
    ("filter.japanese", "Japanese Level"),
    ("filter.workDays", "Work Days"),
    ("filter.reset", "Reset"),
    ("filter.apply", "Apply Filters"),

    // sort
    ("sort.wage", "By Wage"),
    ("sort.commute", "By Commute"),
    ("sort.date", "By Date"),
    ("sort.title", "Sort By"),

    // empty
    ("empty.chosen", "No chosen jobs yet"),
    ("empty.chosenSub", "Jobs you like will appear here"),
    ("empty.refused", "No refused jobs yet"),
    ("empty.refusedSub", "Jobs you pass on will appear here"),

    // language
    ("language.select", "Select Language"),
];

/// Uzbek strings ("uz")
pub const UZBEK_STRINGS: &[(&str, &str)] = &[
    // app
    ("app.title", "HyMatch"),
    ("app.subtitle", "Mukammal qisman ish topish"),

    // common
    ("common.menu", "Menyu"),

    // tabs
    ("tabs.jobs", "Ishlar"),
    ("tabs.refused", "Rad etilgan"),
    ("tabs.chosen", "Tanlangan"),
    ("tabs.profile", "Profil"),

    // contact
    ("contact.title", "Aloqa"),
    ("contact.phone", "Telefon"),
    ("contact.email", "Email"),
    ("contact.chat", "Jonli chat"),
    ("contact.subtitle", "Yordam kerakmi? Qo'llab-quvvatlash jamoamiz bilan bog'laning."),
    ("contact.phoneDetail", "Dush-Jum 9:00-18:00"),
    ("contact.emailDetail", "24 soat ichida javob"),
    ("contact.chatDetail", "24/7 mavjud"),

    // profile
    ("profile.incomplete", "Profil to'liq emas"),
    ("profile.complete", "Profilni to'ldirish"),
    ("profile.edit", "Profilni tahrirlash"),
    ("profile.basicInfo", "Asosiy ma'lumotlar"),
    ("profile.contactInfo", "Aloqa ma'lumotlari"),
    ("profile.workPreferences", "Ish afzalliklari"),
    ("profile.firstName", "Ism"),
    ("profile.lastName", "Familiya"),
    ("profile.age", "Yosh"),
    ("profile.gender", "Jins"),
    ("profile.nationality", "Millat"),
    ("profile.email", "Email"),
    ("profile.phone", "Telefon"),
    ("profile.japaneseLevel", "Yapon tili darajasi"),
    ("profile.preferredDays", "Afzal ko'rilgan ish kunlari"),
    ("profile.preferredJobTypes", "Afzal ko'rilgan ish turlari"),
    ("profile.addPhoto", "Rasm qo'shish"),
    ("profile.save", "Profilni saqlash"),
    ("profile.male", "Erkak"),
    ("profile.female", "Ayol"),
    ("profile.other", "Boshqa"),

    // filter
    ("filter.title", "Filtr"),
    ("filter.jobType", "Ish turi"),
    ("filter.wage", "Maosh"),
    ("filter.japanese", "Yapon tili darajasi"),
    ("filter.workDays", "Ish kunlari"),
    ("filter.reset", "Qayta o'rnatish"),
    ("filter.apply", "Filtrlarni qo'llash"),

    // sort
    ("sort.wage", "Maosh bo'yicha"),
    ("sort.commute", "Yo'l vaqti bo'yicha"),
    ("sort.date", "Sana bo'yicha"),
    ("sort.title", "Saralash"),

    // empty
    ("empty.chosen", "Hali tanlangan ishlar yo'q"),
    ("empty.chosenSub", "Yoqtirgan ishlaringiz shu yerda ko'rinadi"),
    ("empty.refused", "Hali rad etilgan ishlar yo'q"),
    ("empty.refusedSub", "O'tkazib yuborilgan ishlar shu yerda ko'rinadi"),

    // language
    ("language.select", "Tilni tanlang"),
];
/// Built-in tables as `(locale, entries)` pairs.
pub const BUILTIN_LOCALES: &[(&str, &[(&str, &str)])] = &[
    ("ja", JAPANESE_STRINGS),
    ("en", ENGLISH_STRINGS),
    ("uz", UZBEK_STRINGS),
];
