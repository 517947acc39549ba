use std::collections::HashSet;
use std::path::Path;

use include_dir::{Dir, DirEntry, include_dir};
use serde::Deserialize;

use crate::domain::{AppError, Slot, Template};
use crate::ports::TemplateStore;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// On-disk shape of a template asset.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TemplateAsset {
    id: String,
    name: String,
    category: String,
    description: String,
    #[serde(default)]
    slots: Vec<Slot>,
    body: String,
}

/// Template catalog compiled into the binary.
///
/// Parsed once at construction; read-only afterwards.
#[derive(Debug, Clone)]
pub struct EmbeddedTemplateStore {
    templates: Vec<Template>,
}

impl EmbeddedTemplateStore {
    /// Load the built-in catalog.
    pub fn load() -> Result<Self, AppError> {
        let mut sources = Vec::new();
        collect_sources(&TEMPLATES_DIR, &mut sources);
        Self::from_sources(sources)
    }

    /// Build a catalog from `(path, yaml)` pairs.
    pub fn from_sources<'a, I>(sources: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut templates = Vec::new();
        let mut seen = HashSet::new();

        for (path, content) in sources {
            let template = parse_asset(path, content)?;
            if !seen.insert(template.id().to_string()) {
                return Err(AppError::TemplateDefinition {
                    id: template.id().to_string(),
                    reason: format!("duplicate template id (again in {path})"),
                });
            }
            templates.push(template);
        }

        if templates.is_empty() {
            return Err(AppError::TemplateDefinition {
                id: "<catalog>".to_string(),
                reason: "no templates found".to_string(),
            });
        }

        templates.sort_by(|a, b| (a.category(), a.id()).cmp(&(b.category(), b.id())));
        tracing::debug!(count = templates.len(), "loaded template catalog");
        Ok(Self { templates })
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn templates(&self) -> &[Template] {
        &self.templates
    }
}

fn parse_asset(path: &str, content: &str) -> Result<Template, AppError> {
    let asset: TemplateAsset =
        serde_yaml::from_str(content).map_err(|err| AppError::TemplateDefinition {
            id: path.to_string(),
            reason: err.to_string(),
        })?;

    let stem = Path::new(path).file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    if stem != asset.id {
        return Err(AppError::TemplateDefinition {
            id: asset.id,
            reason: format!("file name '{path}' does not match template id"),
        });
    }

    Template::new(asset.id, asset.name, asset.category, asset.description, asset.slots, asset.body)
}

fn collect_sources(dir: &'static Dir<'static>, sources: &mut Vec<(&'static str, &'static str)>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let is_yaml = file.path().extension().is_some_and(|ext| ext == "yml");
                if let (true, Some(path), Some(content)) =
                    (is_yaml, file.path().to_str(), file.contents_utf8())
                {
                    sources.push((path, content));
                }
            }
            DirEntry::Dir(subdir) => collect_sources(subdir, sources),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::domain::{Segment, render, resolve};

    #[test]
    fn builtin_catalog_loads() {
        let store = EmbeddedTemplateStore::load().expect("catalog should load");
        assert!(store.list().len() >= 20);
    }

    #[test]
    fn builtin_catalog_is_sorted_by_category_then_id() {
        let store = EmbeddedTemplateStore::load().unwrap();
        let keys: Vec<(String, String)> =
            store.list().into_iter().map(|s| (s.category, s.id)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn every_placeholder_has_a_declared_slot() {
        let store = EmbeddedTemplateStore::load().unwrap();
        for template in store.templates() {
            for segment in template.segments() {
                if let Segment::Placeholder(name) = segment {
                    assert!(
                        template.slot(name).is_some(),
                        "{}: placeholder {{{}}} has no slot",
                        template.id(),
                        name
                    );
                }
            }
        }
    }

    #[test]
    fn every_template_resolves_when_required_slots_are_supplied() {
        let store = EmbeddedTemplateStore::load().unwrap();
        for template in store.templates() {
            let supplied: BTreeMap<String, String> = template
                .slots()
                .iter()
                .filter(|slot| slot.required)
                .map(|slot| (slot.name.clone(), format!("value-of-{}", slot.name)))
                .collect();

            let binding = resolve(template, &supplied)
                .unwrap_or_else(|err| panic!("{}: {err}", template.id()));
            let rendered = render(template, &binding);

            for slot in template.slots() {
                assert!(
                    !rendered.text.contains(&format!("{{{}}}", slot.name)),
                    "{}: {{{}}} left in output",
                    template.id(),
                    slot.name
                );
                if slot.required {
                    assert!(rendered.text.contains(&format!("value-of-{}", slot.name)));
                }
            }
        }
    }

    #[test]
    fn rejects_required_slot_with_empty_default() {
        let yaml = "id: alpha\nname: A\ncategory: general\ndescription: d\nslots:\n  - name: x\n    default: \"\"\nbody: X={x}\n";
        let err = EmbeddedTemplateStore::from_sources([("alpha.yml", yaml)]).unwrap_err();
        assert!(err.to_string().contains("empty default"));
    }

    #[test]
    fn code_review_declares_language_and_code() {
        let store = EmbeddedTemplateStore::load().unwrap();
        let template = store.get("code-review").unwrap();
        let names: Vec<&str> = template.slots().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["language", "code"]);
    }

    #[test]
    fn unknown_id_suggests_close_matches() {
        let store = EmbeddedTemplateStore::load().unwrap();
        match store.get("code_review_v2") {
            Err(AppError::TemplateNotFound { suggestions, .. }) => {
                assert!(suggestions.contains(&"code-review".to_string()));
            }
            other => panic!("unexpected result: {other:?}"),
        }
        match store.get("nonexistent") {
            Err(AppError::TemplateNotFound { id, suggestions }) => {
                assert_eq!(id, "nonexistent");
                assert!(suggestions.is_empty());
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_mismatched_file_name() {
        let yaml = "id: alpha\nname: A\ncategory: general\ndescription: d\nbody: hi\n";
        let err = EmbeddedTemplateStore::from_sources([("beta.yml", yaml)]).unwrap_err();
        assert!(matches!(err, AppError::TemplateDefinition { ref id, .. } if id == "alpha"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let yaml = "id: alpha\nname: A\ncategory: general\ndescription: d\nbody: hi\n";
        let err = EmbeddedTemplateStore::from_sources([("alpha.yml", yaml), ("x/alpha.yml", yaml)])
            .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn rejects_unknown_asset_fields() {
        let yaml = "id: alpha\nname: A\ncategory: general\ndescription: d\nbody: hi\nvars: []\n";
        assert!(EmbeddedTemplateStore::from_sources([("alpha.yml", yaml)]).is_err());
    }

    #[test]
    fn slot_fields_default_to_required_single_line() {
        let yaml = "id: alpha\nname: A\ncategory: general\ndescription: d\nslots:\n  - name: topic\nbody: About {topic}\n";
        let store = EmbeddedTemplateStore::from_sources([("alpha.yml", yaml)]).unwrap();
        let slot = store.get("alpha").unwrap().slot("topic").unwrap().clone();
        assert!(slot.required);
        assert!(!slot.multiline);
        assert_eq!(slot.default, None);
    }
}
