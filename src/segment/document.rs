//! Documents indexed into segments.

/// A single `(name, value)` pair of a document.
///
/// Values are indexed as one term each; no analysis is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// The field name.
    pub name: Vec<u8>,
    /// The field value, indexed verbatim as a term.
    pub value: Vec<u8>,
}

impl Field {
    /// Create a new field.
    pub fn new<N: Into<Vec<u8>>, V: Into<Vec<u8>>>(name: N, value: V) -> Self {
        Field {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A document: an ordered list of fields. A name may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    fields: Vec<Field>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Document { fields: Vec::new() }
    }

    /// Create a document builder.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    /// Add a field to the document.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// The fields of this document.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The first value of `name`, if present.
    pub fn get(&self, name: &[u8]) -> Option<&[u8]> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_slice())
    }
}

/// Builder for creating documents.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Create a new document builder.
    pub fn new() -> Self {
        DocumentBuilder {
            document: Document::new(),
        }
    }

    /// Add a field to the document.
    pub fn add_field<N: Into<Vec<u8>>, V: Into<Vec<u8>>>(mut self, name: N, value: V) -> Self {
        self.document.add_field(Field::new(name, value));
        self
    }

    /// Build the document.
    pub fn build(self) -> Document {
        self.document
    }
}
