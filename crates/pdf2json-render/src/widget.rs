//! Form widget extraction.
//!
//! Flattens [`WidgetAnnot`] records into the document model's [`Field`] and
//! [`Boxset`] shapes: dispatch on field type and flags, semantic type hints
//! from JavaScript format functions, radio-group accumulation, and geometry
//! conversion with the per-type nudges the original form layouts depend on.

use tracing::warn;

use pdf2json_model::{
    AM_READ_ONLY, Boxset, DEFAULT_FIELD_STYLE, Field, FieldId, FieldKind, OptionList, Page, Rect,
    SigBlock, parse_pdf_date, to_form_x, to_form_y,
};

use crate::engine::{SigInfo, WidgetAnnot};

/// `/Ff` bit marking a button field as a radio option.
pub const FLAG_RADIO: u32 = 0x8000;

/// `/Ff` bit marking a button field as a push button.
pub const FLAG_PUSH_BUTTON: u32 = 0x10000;

/// Text fields taller than this (viewport units) keep their top edge and
/// give up [`TEXT_FIELD_SHRINK`] of height.
pub const TALL_TEXT_MIN: f64 = 20.0;

/// Height removed from tall text fields.
pub const TEXT_FIELD_SHRINK: f64 = 2.0;

/// Upward shift applied to every non-dropdown widget.
pub const WIDGET_RAISE: f64 = 3.0;

/// Minimum widget height after adjustment, viewport units.
pub const MIN_FIELD_HEIGHT: f64 = 5.0;

/// How a widget's rectangle is nudged before unit conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
enum GeometryKind {
    Text,
    Dropdown,
    Widget,
}

/// Extracts one page's widget annotations into fields and boxsets.
///
/// Owns the tab-index counter: indices increase monotonically across every
/// page extracted through the same instance and are never reused. Radio
/// groups are accumulated per page; a [`Boxset`] never spans pages.
#[derive(Debug, Default)]
pub struct WidgetExtractor {
    next_tab_index: u32,
}

impl WidgetExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract `widgets` into `page.fields` and `page.boxsets`.
    ///
    /// Unsupported widgets are logged and skipped; extraction continues
    /// with the rest of the page.
    pub fn extract_page(&mut self, widgets: &[WidgetAnnot], page: &mut Page) {
        // Radio boxsets keyed by full field name, in first-seen order.
        let mut groups: Vec<Boxset> = Vec::new();

        for annot in widgets {
            match annot.field_type.as_deref() {
                Some("Btn") if annot.field_flags & FLAG_PUSH_BUTTON != 0 => {
                    let field = self.base_field(annot, FieldKind::named("link"), GeometryKind::Widget);
                    page.fields.push(field);
                }
                Some("Btn") if annot.field_flags & FLAG_RADIO != 0 => {
                    let mut field =
                        self.base_field(annot, FieldKind::named("radio"), GeometryKind::Widget);
                    field.value = annot.export_value.clone();
                    field.checked = Some(is_checked(annot));
                    match groups.iter_mut().find(|g| {
                        g.id.as_ref().is_some_and(|id| id.id == annot.full_name)
                    }) {
                        Some(group) => group.boxes.push(field),
                        None => groups.push(Boxset {
                            boxes: vec![field],
                            id: Some(FieldId {
                                id: annot.full_name.clone(),
                                en: 0,
                            }),
                        }),
                    }
                }
                Some("Btn") => {
                    let mut field =
                        self.base_field(annot, FieldKind::named("box"), GeometryKind::Widget);
                    field.checked = Some(is_checked(annot));
                    page.boxsets.push(Boxset {
                        boxes: vec![field],
                        id: None,
                    });
                }
                Some("Tx") => {
                    let (kind, mask) = text_kind(annot);
                    let mut field = self.base_field(annot, kind, GeometryKind::Text);
                    field.mask_value = mask;
                    field.value = annot.value.clone();
                    page.fields.push(field);
                }
                Some("Ch") => {
                    let mut field =
                        self.base_field(annot, FieldKind::named("alpha"), GeometryKind::Dropdown);
                    field.value = annot.value.clone();
                    field.options = Some(option_list(annot));
                    page.fields.push(field);
                }
                Some("Sig") => {
                    let mut field = self.base_field(
                        annot,
                        FieldKind::named("signature"),
                        GeometryKind::Widget,
                    );
                    field.sig = Some(sig_block(annot.sig.as_ref()));
                    field.value = annot.value.clone();
                    page.fields.push(field);
                }
                other => {
                    warn!(
                        field = %annot.full_name,
                        field_type = ?other,
                        "unsupported field type, widget skipped"
                    );
                }
            }
        }

        page.boxsets.extend(groups);
    }

    fn base_field(&mut self, annot: &WidgetAnnot, kind: FieldKind, geom: GeometryKind) -> Field {
        let (x, y, w, h) = field_rect(annot.rect, geom);
        let tab_index = self.next_tab_index;
        self.next_tab_index += 1;
        Field {
            id: FieldId {
                id: annot.full_name.clone(),
                en: 0,
            },
            style: DEFAULT_FIELD_STYLE,
            tab_index,
            attr_mask: if annot.read_only { AM_READ_ONLY } else { 0 },
            alt_text: annot.alt_text.clone(),
            mask_value: None,
            x,
            y,
            w,
            h,
            kind,
            value: None,
            options: None,
            checked: None,
            sig: None,
        }
    }
}

/// Whether a box widget is on, by matching its on-state name against the
/// field-tree value.
fn is_checked(annot: &WidgetAnnot) -> bool {
    let current = annot
        .parent_value
        .as_deref()
        .or(annot.value.as_deref());
    match (current, annot.export_value.as_deref()) {
        (Some(v), Some(on)) => v == on,
        (Some(v), None) => !v.is_empty() && v != "Off",
        _ => false,
    }
}

/// Semantic type hint (and optional keystroke mask) of a text field, from
/// its additional-actions format function.
fn text_kind(annot: &WidgetAnnot) -> (FieldKind, Option<String>) {
    let Some(func) = annot.format_func.as_deref() else {
        return (FieldKind::named("alpha"), None);
    };
    match func {
        "AFNumber_Format" => (FieldKind::named("number"), None),
        "AFPercent_Format" => (FieldKind::named("percent"), None),
        "AFDate_FormatEx" => (FieldKind::named("date"), None),
        "AFSpecial_KeystrokeEx" => (FieldKind::named("mask"), annot.format_mask.clone()),
        // Argument picks the format: 0/1 zip, 2 phone, 3 ssn.
        "AFSpecial_Format" => match annot.format_arg {
            Some(0) | Some(1) => (FieldKind::named("zip"), None),
            Some(2) => (FieldKind::named("phone"), None),
            Some(3) => (FieldKind::named("ssn"), None),
            _ => (FieldKind::named("alpha"), None),
        },
        _ => (FieldKind::named("alpha"), None),
    }
}

fn option_list(annot: &WidgetAnnot) -> OptionList {
    let mut list = OptionList::default();
    for opt in &annot.options {
        list.values.push(opt.value.clone());
        list.display.push(opt.display.clone());
    }
    list
}

/// Copy signature metadata, converting the PDF date to ISO-8601.
/// Unparsable dates pass through raw.
fn sig_block(sig: Option<&SigInfo>) -> SigBlock {
    let Some(sig) = sig else {
        return SigBlock::default();
    };
    SigBlock {
        name: sig.name.clone(),
        date: sig
            .date
            .as_ref()
            .map(|d| parse_pdf_date(d).unwrap_or_else(|| d.clone())),
        location: sig.location.clone(),
        reason: sig.reason.clone(),
        contact_info: sig.contact_info.clone(),
    }
}

/// Normalize the annotation rectangle, apply the per-type vertical nudge,
/// enforce the minimum height, and convert to form-grid units.
fn field_rect(rect: [f64; 4], geom: GeometryKind) -> (f64, f64, f64, f64) {
    let r = Rect::normalized(rect[0], rect[1], rect[2], rect[3]);
    let x = r.x0;
    let mut y = r.y0;
    let w = r.width();
    let mut h = r.height();

    match geom {
        GeometryKind::Text => {
            // Tall boxes keep the top edge and lose a sliver of height so
            // their content baseline lines up with the printed label.
            if h > TALL_TEXT_MIN {
                h -= TEXT_FIELD_SHRINK;
            }
            y -= WIDGET_RAISE;
        }
        GeometryKind::Widget => {
            y -= WIDGET_RAISE;
        }
        GeometryKind::Dropdown => {}
    }
    h = h.max(MIN_FIELD_HEIGHT);

    (to_form_x(x), to_form_y(y), to_form_x(w), to_form_y(h))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(name: &str, field_type: &str) -> WidgetAnnot {
        WidgetAnnot {
            full_name: name.to_string(),
            field_type: Some(field_type.to_string()),
            rect: [72.0, 96.0, 312.0, 120.0],
            ..WidgetAnnot::default()
        }
    }

    fn extract(widgets: &[WidgetAnnot]) -> Page {
        let mut page = Page::new(34.0, 44.0);
        WidgetExtractor::new().extract_page(widgets, &mut page);
        page
    }

    // --- dispatch tests ---

    #[test]
    fn text_field_becomes_alpha() {
        let page = extract(&[widget("name", "Tx")]);
        assert_eq!(page.fields.len(), 1);
        assert_eq!(page.fields[0].kind.name, "alpha");
        assert_eq!(page.fields[0].style, DEFAULT_FIELD_STYLE);
        assert!(page.boxsets.is_empty());
    }

    #[test]
    fn push_button_becomes_link() {
        let mut w = widget("submit", "Btn");
        w.field_flags = FLAG_PUSH_BUTTON;
        let page = extract(&[w]);
        assert_eq!(page.fields[0].kind.name, "link");
        assert!(page.boxsets.is_empty());
    }

    #[test]
    fn lone_checkbox_becomes_singleton_boxset() {
        let page = extract(&[widget("agree", "Btn")]);
        assert!(page.fields.is_empty());
        assert_eq!(page.boxsets.len(), 1);
        assert_eq!(page.boxsets[0].boxes.len(), 1);
        assert_eq!(page.boxsets[0].boxes[0].kind.name, "box");
        assert_eq!(page.boxsets[0].id, None);
    }

    #[test]
    fn radio_options_group_by_full_name() {
        let mut a = widget("group1", "Btn");
        a.field_flags = FLAG_RADIO;
        a.export_value = Some("Yes".to_string());
        let mut b = widget("group1", "Btn");
        b.field_flags = FLAG_RADIO;
        b.export_value = Some("No".to_string());

        let page = extract(&[a, b]);
        assert_eq!(page.boxsets.len(), 1);
        let group = &page.boxsets[0];
        assert_eq!(group.boxes.len(), 2);
        assert_eq!(group.id.as_ref().unwrap().id, "group1");
        assert_eq!(group.boxes[0].kind.name, "radio");
    }

    #[test]
    fn distinct_radio_groups_stay_separate() {
        let mut a = widget("group1", "Btn");
        a.field_flags = FLAG_RADIO;
        let mut b = widget("group2", "Btn");
        b.field_flags = FLAG_RADIO;
        let page = extract(&[a, b]);
        assert_eq!(page.boxsets.len(), 2);
    }

    #[test]
    fn checked_radio_matches_parent_value() {
        let mut yes = widget("group1", "Btn");
        yes.field_flags = FLAG_RADIO;
        yes.export_value = Some("Yes".to_string());
        yes.parent_value = Some("Yes".to_string());
        let mut no = widget("group1", "Btn");
        no.field_flags = FLAG_RADIO;
        no.export_value = Some("No".to_string());
        no.parent_value = Some("Yes".to_string());

        let page = extract(&[yes, no]);
        let boxes = &page.boxsets[0].boxes;
        assert_eq!(boxes[0].checked, Some(true));
        assert_eq!(boxes[1].checked, Some(false));
    }

    #[test]
    fn checkbox_off_value_not_checked() {
        let mut w = widget("agree", "Btn");
        w.value = Some("Off".to_string());
        let page = extract(&[w]);
        assert_eq!(page.boxsets[0].boxes[0].checked, Some(false));
    }

    #[test]
    fn unsupported_field_type_skipped() {
        let page = extract(&[widget("odd", "Xyz"), widget("name", "Tx")]);
        assert_eq!(page.fields.len(), 1);
        assert_eq!(page.fields[0].id.id, "name");
    }

    #[test]
    fn missing_field_type_skipped() {
        let mut w = widget("odd", "Tx");
        w.field_type = None;
        assert!(extract(&[w]).fields.is_empty());
    }

    // --- format function tests ---

    fn formatted(func: &str, arg: Option<i32>) -> WidgetAnnot {
        let mut w = widget("f", "Tx");
        w.format_func = Some(func.to_string());
        w.format_arg = arg;
        w
    }

    #[test]
    fn format_functions_set_type_hint() {
        assert_eq!(
            extract(&[formatted("AFNumber_Format", None)]).fields[0].kind.name,
            "number"
        );
        assert_eq!(
            extract(&[formatted("AFPercent_Format", None)]).fields[0].kind.name,
            "percent"
        );
        assert_eq!(
            extract(&[formatted("AFDate_FormatEx", None)]).fields[0].kind.name,
            "date"
        );
    }

    #[test]
    fn special_format_argument_selects_hint() {
        assert_eq!(
            extract(&[formatted("AFSpecial_Format", Some(0))]).fields[0].kind.name,
            "zip"
        );
        assert_eq!(
            extract(&[formatted("AFSpecial_Format", Some(1))]).fields[0].kind.name,
            "zip"
        );
        assert_eq!(
            extract(&[formatted("AFSpecial_Format", Some(2))]).fields[0].kind.name,
            "phone"
        );
        assert_eq!(
            extract(&[formatted("AFSpecial_Format", Some(3))]).fields[0].kind.name,
            "ssn"
        );
        assert_eq!(
            extract(&[formatted("AFSpecial_Format", Some(9))]).fields[0].kind.name,
            "alpha"
        );
    }

    #[test]
    fn keystroke_mask_carried_as_mv() {
        let mut w = formatted("AFSpecial_KeystrokeEx", None);
        w.format_mask = Some("99-9999999".to_string());
        let field = &extract(&[w]).fields[0];
        assert_eq!(field.kind.name, "mask");
        assert_eq!(field.mask_value.as_deref(), Some("99-9999999"));
    }

    #[test]
    fn unrecognized_format_function_leaves_field_untyped() {
        assert_eq!(
            extract(&[formatted("AFRange_Validate", None)]).fields[0].kind.name,
            "alpha"
        );
    }

    // --- dropdown tests ---

    #[test]
    fn choice_field_carries_option_list() {
        use crate::engine::SelectOption;
        let mut w = widget("state", "Ch");
        w.options = vec![
            SelectOption {
                value: "CA".to_string(),
                display: "California".to_string(),
            },
            SelectOption {
                value: "NY".to_string(),
                display: "New York".to_string(),
            },
        ];
        w.value = Some("CA".to_string());
        let field = &extract(&[w]).fields[0];
        let pl = field.options.as_ref().unwrap();
        assert_eq!(pl.values, vec!["CA", "NY"]);
        assert_eq!(pl.display, vec!["California", "New York"]);
        assert_eq!(field.value.as_deref(), Some("CA"));
    }

    // --- signature tests ---

    #[test]
    fn signature_field_copies_sig_block() {
        let mut w = widget("sig", "Sig");
        w.sig = Some(SigInfo {
            name: Some("Jordan Doe".to_string()),
            date: Some("D:20260228120000Z".to_string()),
            reason: Some("Approval".to_string()),
            ..SigInfo::default()
        });
        let field = &extract(&[w]).fields[0];
        assert_eq!(field.kind.name, "signature");
        let sig = field.sig.as_ref().unwrap();
        assert_eq!(sig.name.as_deref(), Some("Jordan Doe"));
        assert_eq!(sig.date.as_deref(), Some("2026-02-28T12:00:00Z"));
        assert_eq!(sig.reason.as_deref(), Some("Approval"));
        assert_eq!(sig.location, None);
    }

    #[test]
    fn unparsable_sig_date_passes_through() {
        let mut w = widget("sig", "Sig");
        w.sig = Some(SigInfo {
            date: Some("last Tuesday".to_string()),
            ..SigInfo::default()
        });
        let field = &extract(&[w]).fields[0];
        assert_eq!(field.sig.as_ref().unwrap().date.as_deref(), Some("last Tuesday"));
    }

    // --- attribute tests ---

    #[test]
    fn read_only_sets_attr_mask() {
        let mut w = widget("name", "Tx");
        w.read_only = true;
        assert_eq!(extract(&[w]).fields[0].attr_mask, AM_READ_ONLY);
        assert_eq!(extract(&[widget("name", "Tx")]).fields[0].attr_mask, 0);
    }

    #[test]
    fn alt_text_carried_as_tu() {
        let mut w = widget("name", "Tx");
        w.alt_text = Some("Applicant full name".to_string());
        assert_eq!(
            extract(&[w]).fields[0].alt_text.as_deref(),
            Some("Applicant full name")
        );
    }

    #[test]
    fn tab_index_monotonic_across_pages() {
        let mut extractor = WidgetExtractor::new();
        let mut p1 = Page::new(34.0, 44.0);
        extractor.extract_page(&[widget("a", "Tx"), widget("b", "Tx")], &mut p1);
        let mut p2 = Page::new(34.0, 44.0);
        extractor.extract_page(&[widget("c", "Tx")], &mut p2);

        assert_eq!(p1.fields[0].tab_index, 0);
        assert_eq!(p1.fields[1].tab_index, 1);
        assert_eq!(p2.fields[0].tab_index, 2);
    }

    // --- geometry tests ---

    #[test]
    fn rect_normalized_before_conversion() {
        let mut w = widget("name", "Tx");
        // Corners given top-right to bottom-left.
        w.rect = [312.0, 120.0, 72.0, 96.0];
        let field = &extract(&[w]).fields[0];
        assert_eq!(field.x, 3.0);
        assert_eq!(field.w, 10.0);
    }

    #[test]
    fn tall_text_field_shrinks_from_bottom() {
        // Height 30 > TALL_TEXT_MIN, so 2 units are shaved off.
        let mut w = widget("notes", "Tx");
        w.rect = [0.0, 0.0, 240.0, 30.0];
        let field = &extract(&[w]).fields[0];
        assert_eq!(field.h, to_form_y(28.0));
    }

    #[test]
    fn short_text_field_keeps_height() {
        let mut w = widget("name", "Tx");
        w.rect = [0.0, 96.0, 240.0, 114.0]; // height 18 <= TALL_TEXT_MIN
        let field = &extract(&[w]).fields[0];
        assert_eq!(field.h, to_form_y(18.0));
    }

    #[test]
    fn widgets_raised_dropdowns_not() {
        let mut check = widget("agree", "Btn");
        check.rect = [0.0, 96.0, 24.0, 120.0];
        let page = extract(&[check]);
        assert_eq!(page.boxsets[0].boxes[0].y, to_form_y(93.0));

        let mut drop = widget("state", "Ch");
        drop.rect = [0.0, 96.0, 240.0, 120.0];
        let page = extract(&[drop]);
        assert_eq!(page.fields[0].y, to_form_y(96.0));
    }

    #[test]
    fn minimum_height_floor_applies() {
        let mut w = widget("thin", "Tx");
        w.rect = [0.0, 100.0, 240.0, 102.0]; // height 2 < floor
        let field = &extract(&[w]).fields[0];
        assert_eq!(field.h, to_form_y(MIN_FIELD_HEIGHT));
    }
}
