//! Reading layer names out of a WMS GetCapabilities document.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;

/// A `<Layer>` that carries a `<Name>`, i.e. one that can be requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedLayer {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub queryable: bool,
}

#[derive(Default)]
struct LayerFrame {
    name: Option<String>,
    title: Option<String>,
    queryable: bool,
}

/// Extract every named layer from a capabilities document, in document order
/// of their closing tags (children before the group that contains them).
///
/// Works for both 1.1.1 (`WMT_MS_Capabilities`) and 1.3.0 (`WMS_Capabilities`)
/// roots, with or without a namespace prefix. Only `Name`/`Title` elements that
/// are direct children of a `Layer` count; service and style titles are ignored.
pub fn layer_names(xml: &str) -> Result<Vec<NamedLayer>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut frames: Vec<LayerFrame> = Vec::new();
    let mut layers = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let local = e.local_name().as_ref().to_vec();
                if local == b"Layer" {
                    frames.push(LayerFrame {
                        queryable: is_queryable(&e),
                        ..LayerFrame::default()
                    });
                }
                path.push(local);
            }
            Event::Text(t) => {
                if let (Some(element), Some(frame)) =
                    (direct_layer_child(&path), frames.last_mut())
                {
                    let text = t.unescape()?.into_owned();
                    match element {
                        b"Name" => frame.name = Some(text),
                        b"Title" => frame.title = Some(text),
                        _ => {}
                    }
                }
            }
            Event::End(e) => {
                if e.local_name().as_ref() == b"Layer" {
                    if let Some(LayerFrame {
                        name: Some(name),
                        title,
                        queryable,
                    }) = frames.pop()
                    {
                        layers.push(NamedLayer {
                            name,
                            title,
                            queryable,
                        });
                    }
                }
                path.pop();
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(layers)
}

fn is_queryable(e: &BytesStart<'_>) -> bool {
    matches!(
        e.try_get_attribute("queryable"),
        Ok(Some(attr)) if attr.value.as_ref() == b"1"
    )
}

/// The current element name if its parent is a `Layer`.
fn direct_layer_child(path: &[Vec<u8>]) -> Option<&[u8]> {
    match path {
        [.., parent, element] if parent.as_slice() == b"Layer" => Some(element.as_slice()),
        _ => None,
    }
}
