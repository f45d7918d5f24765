//! 메뉴 화면 구성 규칙(출력 줄 생성).

use crate::domain::menu::{Menu, MenuStyle, OptionIdentity};

/// 제목 줄. 제목이 비어 있으면 출력하지 않는다.
pub fn title_line(title: &str, style: &MenuStyle) -> Option<String> {
    if title.is_empty() {
        return None;
    }
    let decor = style.title_decorator.repeat(3);
    Some(format!("{decor} {title}"))
}

/// 옵션 한 줄: `아이콘 + 구분자 + 텍스트`.
pub fn option_line(identity: &OptionIdentity, style: &MenuStyle) -> String {
    match identity {
        OptionIdentity::SubMenu(menu) => format!(
            "{}{}{}",
            style.submenu_icon,
            style.submenu_separator,
            menu.label()
        ),
        OptionIdentity::Label(label) => {
            format!("{}{}{}", style.action_icon, style.action_separator, label)
        }
    }
}

/// 입력 프롬프트 직전까지 출력할 전체 줄(마지막 빈 줄 포함).
pub fn menu_lines(menu: &Menu) -> Vec<String> {
    let style = menu.style();
    let mut lines = Vec::with_capacity(menu.len() + 2);

    if let Some(title) = title_line(&menu.title(), &style) {
        lines.push(title);
    }
    for entry in menu.entries() {
        lines.push(option_line(&entry.identity, &style));
    }
    lines.push(String::new());
    lines
}
