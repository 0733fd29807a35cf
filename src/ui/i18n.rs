use crate::domain::entities::preferences::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Language,
    AddUser,
    Light,
    Dark,
    UserList,
    LoadingUsers,
    FailedToLoadUsers,
    Filter,
    SearchByNameOrEmail,
    PageSize,
    Id,
    FirstName,
    LastName,
    Email,
    Age,
    Phone,
    Country,
    NoUsersFound,
    Prev,
    Next,
    AboutUs,
    ContactUs,
    CookieSettings,
}

pub fn text(language: Language, label: Label) -> &'static str {
    match language {
        Language::En => english(label),
        Language::Es => spanish(label),
        Language::De => german(label),
        Language::Zh => chinese(label),
    }
}

fn english(label: Label) -> &'static str {
    match label {
        Label::Language => "Language",
        Label::AddUser => "Add User",
        Label::Light => "Light",
        Label::Dark => "Dark",
        Label::UserList => "User List",
        Label::LoadingUsers => "Loading users...",
        Label::FailedToLoadUsers => "Failed to load users.",
        Label::Filter => "Filter",
        Label::SearchByNameOrEmail => "Search by name or email",
        Label::PageSize => "Page size",
        Label::Id => "ID",
        Label::FirstName => "First Name",
        Label::LastName => "Last Name",
        Label::Email => "Email",
        Label::Age => "Age",
        Label::Phone => "Phone",
        Label::Country => "Country",
        Label::NoUsersFound => "No users found",
        Label::Prev => "Prev",
        Label::Next => "Next",
        Label::AboutUs => "About us",
        Label::ContactUs => "Contact us",
        Label::CookieSettings => "Cookie settings",
    }
}

fn spanish(label: Label) -> &'static str {
    match label {
        Label::Language => "Idioma",
        Label::AddUser => "Agregar usuario",
        Label::Light => "Claro",
        Label::Dark => "Oscuro",
        Label::UserList => "Lista de usuarios",
        Label::LoadingUsers => "Cargando usuarios...",
        Label::FailedToLoadUsers => "No se pudieron cargar los usuarios.",
        Label::Filter => "Filtro",
        Label::SearchByNameOrEmail => "Buscar por nombre o correo",
        Label::PageSize => "Tamaño de página",
        Label::Id => "ID",
        Label::FirstName => "Nombre",
        Label::LastName => "Apellido",
        Label::Email => "Correo",
        Label::Age => "Edad",
        Label::Phone => "Teléfono",
        Label::Country => "País",
        Label::NoUsersFound => "No se encontraron usuarios",
        Label::Prev => "Anterior",
        Label::Next => "Siguiente",
        Label::AboutUs => "Sobre nosotros",
        Label::ContactUs => "Contáctanos",
        Label::CookieSettings => "Configuración de cookies",
    }
}

fn german(label: Label) -> &'static str {
    match label {
        Label::Language => "Sprache",
        Label::AddUser => "Benutzer hinzufügen",
        Label::Light => "Hell",
        Label::Dark => "Dunkel",
        Label::UserList => "Benutzerliste",
        Label::LoadingUsers => "Benutzer werden geladen...",
        Label::FailedToLoadUsers => "Benutzer konnten nicht geladen werden.",
        Label::Filter => "Filter",
        Label::SearchByNameOrEmail => "Nach Name oder E-Mail suchen",
        Label::PageSize => "Seitengröße",
        Label::Id => "ID",
        Label::FirstName => "Vorname",
        Label::LastName => "Nachname",
        Label::Email => "E-Mail",
        Label::Age => "Alter",
        Label::Phone => "Telefon",
        Label::Country => "Land",
        Label::NoUsersFound => "Keine Benutzer gefunden",
        Label::Prev => "Zurück",
        Label::Next => "Weiter",
        Label::AboutUs => "Über uns",
        Label::ContactUs => "Kontakt",
        Label::CookieSettings => "Cookie-Einstellungen",
    }
}

fn chinese(label: Label) -> &'static str {
    match label {
        Label::Language => "语言",
        Label::AddUser => "添加用户",
        Label::Light => "浅色",
        Label::Dark => "深色",
        Label::UserList => "用户列表",
        Label::LoadingUsers => "正在加载用户...",
        Label::FailedToLoadUsers => "加载用户失败。",
        Label::Filter => "筛选",
        Label::SearchByNameOrEmail => "按姓名或邮箱搜索",
        Label::PageSize => "每页数量",
        Label::Id => "编号",
        Label::FirstName => "名",
        Label::LastName => "姓",
        Label::Email => "邮箱",
        Label::Age => "年龄",
        Label::Phone => "电话",
        Label::Country => "国家",
        Label::NoUsersFound => "未找到用户",
        Label::Prev => "上一页",
        Label::Next => "下一页",
        Label::AboutUs => "关于我们",
        Label::ContactUs => "联系我们",
        Label::CookieSettings => "Cookie 设置",
    }
}
