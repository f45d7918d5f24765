//! 검증된 메뉴 문서를 실제 메뉴 트리로 조립한다.

use std::collections::HashMap;
use std::rc::Rc;

use crate::application::ports::MenuOutput;
use crate::domain::error::MenuError;
use crate::domain::menu::{Menu, MenuRef};
use crate::infrastructure::actions::{plain_action, submenu_action};

use super::document::{MenuDocument, OptionKind, SubmenuEntry};

/// 루트 메뉴를 조립한다. 같은 id를 여러 부모가 참조하면 하나의 [`MenuRef`]를 공유한다.
pub fn assemble_menu(
    document: &MenuDocument,
    output: Rc<dyn MenuOutput>,
) -> Result<MenuRef, MenuError> {
    let mut assembler = Assembler {
        document,
        output,
        built: HashMap::new(),
        visiting: Vec::new(),
    };
    assembler.build(&document.root)
}

struct Assembler<'a> {
    document: &'a MenuDocument,
    output: Rc<dyn MenuOutput>,
    built: HashMap<String, MenuRef>,
    /// 현재 조립 중인 경로. 순환 참조 탐지에 쓴다.
    visiting: Vec<String>,
}

impl Assembler<'_> {
    fn build(&mut self, id: &str) -> Result<MenuRef, MenuError> {
        if let Some(menu) = self.built.get(id) {
            return Ok(menu.clone());
        }

        if self.visiting.iter().any(|v| v == id) {
            return Err(MenuError::configuration(
                "options",
                format!(
                    "cyclic submenu reference: {} -> {id}",
                    self.visiting.join(" -> ")
                ),
            ));
        }

        let document = self.document;
        let Some(def) = document.menu(id) else {
            return Err(MenuError::configuration(
                "options",
                format!("unknown submenu '{id}'"),
            ));
        };

        self.visiting.push(id.to_string());

        let with_args = !def.forwarded_args.is_empty();
        let mut builder = Menu::builder(def.label.clone())
            .title(def.title.clone())
            .clear_screen(def.clear_screen)
            .exit_key(def.exit_key.clone())
            .forwarded_args(def.forwarded_args.clone())
            .case_sensitive(def.case_sensitive);

        for option in &def.options {
            builder = match &option.kind {
                OptionKind::Plain(action) => builder.option(
                    option.key.clone(),
                    action
                        .as_ref()
                        .map(|spec| plain_action(spec, self.output.clone())),
                ),
                OptionKind::Submenu(SubmenuEntry { menu, action }) => {
                    let nested = self.build(menu)?;
                    builder.submenu(
                        &nested,
                        action
                            .as_ref()
                            .map(|spec| submenu_action(spec, self.output.clone(), with_args)),
                    )
                }
            };
        }

        self.visiting.pop();

        let menu = builder.build()?;
        self.built.insert(id.to_string(), menu.clone());
        Ok(menu)
    }
}
