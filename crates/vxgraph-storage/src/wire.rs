//! XML wire format.
//!
//! Reading keeps element names (with any namespace prefix), attribute order
//! and leaf text exactly as found, so the root's namespace and schema
//! attributes survive a load/save cycle verbatim. Writing emits an XML
//! declaration and two-space indentation.

use indexmap::IndexMap;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use vxgraph_core::id::ElemId;
use vxgraph_core::tag::ElementKind;

use crate::document::Document;
use crate::error::StorageError;

impl Document {
    /// Parses a document from XML text.
    pub fn from_xml(xml: &str) -> Result<Document, StorageError> {
        parse(xml)
    }

    /// Serializes the document as is. Callers that removed elements run
    /// [`Document::fixup_references`] first.
    pub fn to_xml(&self) -> Result<String, StorageError> {
        serialize(self)
    }
}

/// Parses XML text into a [`Document`] whose root must be `openvx`.
pub fn parse(xml: &str) -> Result<Document, StorageError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut doc: Option<Document> = None;
    let mut stack: Vec<ElemId> = Vec::new();
    let mut closed = false;

    loop {
        match reader.read_event().map_err(StorageError::xml)? {
            Event::Start(start) => {
                let id = open_element(&mut doc, &stack, closed, &start)?;
                stack.push(id);
            }
            Event::Empty(start) => {
                open_element(&mut doc, &stack, closed, &start)?;
                if stack.is_empty() {
                    closed = true;
                }
            }
            Event::End(_) => {
                stack.pop();
                if stack.is_empty() {
                    closed = true;
                }
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(StorageError::xml)?;
                push_text(&mut doc, &stack, &text)?;
            }
            Event::CData(data) => {
                let bytes = data.into_inner();
                let text = std::str::from_utf8(&bytes).map_err(StorageError::xml)?;
                push_text(&mut doc, &stack, text)?;
            }
            Event::Eof => break,
            // declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(StorageError::Malformed {
            reason: format!("{} unclosed element(s) at end of input", stack.len()),
        });
    }
    let mut doc = doc.ok_or_else(|| StorageError::Malformed {
        reason: "no root element".into(),
    })?;
    doc.reindex();
    tracing::debug!(elements = doc.len(), "parsed document");
    Ok(doc)
}

fn open_element(
    doc: &mut Option<Document>,
    stack: &[ElemId],
    closed: bool,
    start: &BytesStart<'_>,
) -> Result<ElemId, StorageError> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(StorageError::xml)?
        .to_string();
    let mut attrs = IndexMap::new();
    for attr in start.attributes() {
        let attr = attr.map_err(StorageError::xml)?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(StorageError::xml)?
            .to_string();
        let value = attr.unescape_value().map_err(StorageError::xml)?.into_owned();
        attrs.insert(key, value);
    }

    match (doc.as_mut(), stack.last()) {
        (Some(doc), Some(&parent)) => Ok(doc.push_parsed(parent, name, attrs)),
        (Some(_), None) if closed => Err(StorageError::Malformed {
            reason: format!("second root element '{name}'"),
        }),
        (Some(_), None) => Err(StorageError::Malformed {
            reason: format!("element '{name}' outside the root"),
        }),
        (None, _) => {
            let local = name.rsplit_once(':').map_or(name.as_str(), |(_, l)| l);
            if ElementKind::from_local_name(local) != ElementKind::Root {
                return Err(StorageError::UnexpectedRoot { name });
            }
            let mut new_doc = Document::with_root(&name);
            new_doc.set_root_attrs(attrs);
            let root = new_doc.root();
            *doc = Some(new_doc);
            Ok(root)
        }
    }
}

fn push_text(doc: &mut Option<Document>, stack: &[ElemId], text: &str) -> Result<(), StorageError> {
    if text.is_empty() {
        return Ok(());
    }
    match (doc.as_mut(), stack.last()) {
        (Some(doc), Some(&current)) => {
            doc.append_text(current, text);
            Ok(())
        }
        _ => Err(StorageError::Malformed {
            reason: format!("text outside the root element: '{text}'"),
        }),
    }
}

/// Serializes a [`Document`] to indented XML with a UTF-8 declaration.
pub fn serialize(doc: &Document) -> Result<String, StorageError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(StorageError::xml)?;
    write_element(&mut writer, doc, doc.root())?;
    String::from_utf8(writer.into_inner()).map_err(StorageError::xml)
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    doc: &Document,
    id: ElemId,
) -> Result<(), StorageError> {
    let el = doc.get(id)?;
    let mut start = BytesStart::new(el.name());
    for (key, value) in el.attrs() {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if el.children().is_empty() && el.text().is_none() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(StorageError::xml);
    }

    writer
        .write_event(Event::Start(start))
        .map_err(StorageError::xml)?;
    if let Some(text) = el.text() {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(StorageError::xml)?;
    }
    for child in el.children() {
        write_element(writer, doc, *child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(el.name())))
        .map_err(StorageError::xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vxgraph_core::id::RefId;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<openvx xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns="https://www.khronos.org/registry/vx/schema" xsi:schemaLocation="https://www.khronos.org/registry/vx/schema openvx-1-0.xsd" references="4">
  <!-- a comment -->
  <scalar reference="3" elemType="VX_TYPE_UINT8" name="thresh"><uint8>7</uint8></scalar>
  <graph name="g" reference="0">
    <image reference="2" width="640" height="480" format="U008" name="in"/>
    <node reference="1" name="n">
      <kernel>org.khronos.openvx.box_3x3</kernel>
      <parameter index="0" reference="2"/>
    </node>
  </graph>
</openvx>"#;

    #[test]
    fn parses_structure_and_text() {
        let doc = Document::from_xml(SAMPLE).unwrap();
        let root = doc.root();
        assert_eq!(doc.reference_count(), 4);
        assert_eq!(doc.children(root).len(), 2);
        let scalar = doc.by_reference(RefId(3)).unwrap();
        assert_eq!(doc.kind(scalar), ElementKind::Data(vxgraph_core::DataTag::Scalar));
        let payload = doc.children(scalar)[0];
        assert_eq!(doc.text(payload), Some("7"));
        let node = doc.by_reference(RefId(1)).unwrap();
        let kernel = doc.children_of_kind(node, ElementKind::Kernel).next().unwrap();
        assert_eq!(doc.text(kernel), Some("org.khronos.openvx.box_3x3"));
    }

    #[test]
    fn root_attributes_survive_roundtrip() {
        let doc = Document::from_xml(SAMPLE).unwrap();
        let xml = doc.to_xml().unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains(
            "<openvx xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
             xmlns=\"https://www.khronos.org/registry/vx/schema\" \
             xsi:schemaLocation=\"https://www.khronos.org/registry/vx/schema openvx-1-0.xsd\" \
             references=\"4\">"
        ));
        let again = Document::from_xml(&xml).unwrap();
        assert_eq!(doc.outline(), again.outline());
    }

    #[test]
    fn default_document_serializes_compactly() {
        let xml = Document::default().to_xml().unwrap();
        assert!(xml.contains("<graph name=\"graph\" reference=\"0\"/>"));
    }

    #[test]
    fn escapes_attribute_values() {
        let mut doc = Document::default();
        let root = doc.root();
        let lib = doc.create_child(root, "library").unwrap();
        doc.set_text(lib, Some("a<b & c".into())).unwrap();
        doc.set_attr(lib, "name", "\"quoted\"").unwrap();
        let back = Document::from_xml(&doc.to_xml().unwrap()).unwrap();
        let lib = back.children(back.root())[1];
        assert_eq!(back.text(lib), Some("a<b & c"));
        assert_eq!(back.name(lib), Some("\"quoted\""));
    }

    #[test]
    fn rejects_foreign_roots_and_garbage() {
        match Document::from_xml("<svg/>") {
            Err(StorageError::UnexpectedRoot { name }) => assert_eq!(name, "svg"),
            other => panic!("expected UnexpectedRoot, got {:?}", other),
        }
        assert!(matches!(
            Document::from_xml(""),
            Err(StorageError::Malformed { .. })
        ));
        assert!(Document::from_xml("<openvx><graph></openvx>").is_err());
        assert!(matches!(
            Document::from_xml("<openvx/><openvx/>"),
            Err(StorageError::Malformed { .. })
        ));
    }

    #[test]
    fn namespace_prefixes_are_kept() {
        let doc = Document::from_xml(r#"<vx:openvx xmlns:vx="urn:x" references="0"><vx:graph reference="0"/></vx:openvx>"#).unwrap();
        let graph = doc.children(doc.root())[0];
        assert_eq!(doc.kind(graph), ElementKind::Graph);
        assert!(doc.to_xml().unwrap().contains("<vx:graph reference=\"0\"/>"));
    }
}
