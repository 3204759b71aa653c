//! Static catalog of departmental document templates.
//!
//! The catalog is a fixed lookup from department code and document-type
//! label to an ordered field schema, kept as a single tagged table rather
//! than per-department branching.

use serde::{Deserialize, Serialize};

/// Departments that carry document templates, keyed by their two-digit
/// code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentCode {
    /// Business development ("01").
    BusinessDevelopment,
    /// Operations ("02").
    Operations,
    /// Finance ("03").
    Finance,
    /// Production ("04").
    Production,
    /// Inventory ("05").
    Inventory,
    /// Quality control ("06").
    QualityControl,
    /// Warehousing ("07").
    Warehousing,
    /// Field activity ("08").
    FieldActivity,
}

impl DepartmentCode {
    /// Resolves a two-digit department code.
    ///
    /// Returns `None` for departments without document templates.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "01" => Some(Self::BusinessDevelopment),
            "02" => Some(Self::Operations),
            "03" => Some(Self::Finance),
            "04" => Some(Self::Production),
            "05" => Some(Self::Inventory),
            "06" => Some(Self::QualityControl),
            "07" => Some(Self::Warehousing),
            "08" => Some(Self::FieldActivity),
            _ => None,
        }
    }

    /// Returns the two-digit department code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::BusinessDevelopment => "01",
            Self::Operations => "02",
            Self::Finance => "03",
            Self::Production => "04",
            Self::Inventory => "05",
            Self::QualityControl => "06",
            Self::Warehousing => "07",
            Self::FieldActivity => "08",
        }
    }

    /// Returns the document-type labels available to this department.
    #[must_use]
    pub fn document_types(self) -> Vec<&'static str> {
        templates(self)
            .iter()
            .map(|template| template.document_type)
            .collect()
    }
}

/// Input control backing a template field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Numeric input.
    Number,
    /// Calendar date input.
    Date,
    /// Multi-line text input.
    Multiline,
}

/// One field of a document-template form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Display label; also the key used when rendering a submission.
    pub label: &'static str,
    /// Input control kind.
    pub kind: FieldKind,
    /// Placeholder hint shown in the empty control.
    pub placeholder: &'static str,
}

/// A document template: an ordered field schema for one department form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentTemplate {
    /// Owning department.
    pub department: DepartmentCode,
    /// Document-type label.
    pub document_type: &'static str,
    /// Ordered field schema.
    pub fields: &'static [FieldDescriptor],
}

/// Result of a catalog lookup.
///
/// Unknown department or document-type combinations are an expected
/// outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateAvailability {
    /// A template exists for the combination.
    Available(DocumentTemplate),
    /// No template is assigned to the combination.
    NotAvailable,
}

/// Looks up the template for a department code and document-type label.
#[must_use]
pub fn template_for(department_code: &str, document_type: &str) -> TemplateAvailability {
    let Some(department) = DepartmentCode::from_code(department_code) else {
        return TemplateAvailability::NotAvailable;
    };
    templates(department)
        .iter()
        .find(|template| template.document_type == document_type)
        .copied()
        .map_or(TemplateAvailability::NotAvailable, |template| {
            TemplateAvailability::Available(template)
        })
}

/// Builds a field descriptor; shorthand for the catalog tables below.
const fn field(label: &'static str, kind: FieldKind, placeholder: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        label,
        kind,
        placeholder,
    }
}

/// Returns the template table for one department.
const fn templates(department: DepartmentCode) -> &'static [DocumentTemplate] {
    match department {
        DepartmentCode::BusinessDevelopment => BUSINESS_DEVELOPMENT_TEMPLATES,
        DepartmentCode::Operations => OPERATIONS_TEMPLATES,
        DepartmentCode::Finance => FINANCE_TEMPLATES,
        DepartmentCode::Production => PRODUCTION_TEMPLATES,
        DepartmentCode::Inventory => INVENTORY_TEMPLATES,
        DepartmentCode::QualityControl => QUALITY_CONTROL_TEMPLATES,
        DepartmentCode::Warehousing => WAREHOUSING_TEMPLATES,
        DepartmentCode::FieldActivity => FIELD_ACTIVITY_TEMPLATES,
    }
}

const BUSINESS_DEVELOPMENT_TEMPLATES: &[DocumentTemplate] = &[
    DocumentTemplate {
        department: DepartmentCode::BusinessDevelopment,
        document_type: "Questionnaires",
        fields: &[
            field("Client Name", FieldKind::Text, "Enter client name"),
            field("Industry", FieldKind::Text, "Enter industry"),
            field(
                "Business Requirements",
                FieldKind::Multiline,
                "Describe the business requirements",
            ),
            field("Budget Range", FieldKind::Text, "Enter budget range"),
            field("Expected Timeline", FieldKind::Text, "Enter expected timeline"),
        ],
    },
    DocumentTemplate {
        department: DepartmentCode::BusinessDevelopment,
        document_type: "Checklists",
        fields: &[
            field("Project Name", FieldKind::Text, "Enter project name"),
            field("Checklist Items", FieldKind::Multiline, "One item per line"),
            field("Responsible Person", FieldKind::Text, "Enter responsible person"),
        ],
    },
    DocumentTemplate {
        department: DepartmentCode::BusinessDevelopment,
        document_type: "Product List",
        fields: &[
            field("Product Name", FieldKind::Text, "Enter product name"),
            field("Category", FieldKind::Text, "Enter category"),
            field("Description", FieldKind::Multiline, "Describe the product"),
            field("Specifications", FieldKind::Multiline, "List specifications"),
            field("Pricing", FieldKind::Text, "Enter pricing"),
        ],
    },
    DocumentTemplate {
        department: DepartmentCode::BusinessDevelopment,
        document_type: "Client Needs Form",
        fields: &[
            field("Client Name", FieldKind::Text, "Enter client name"),
            field("Contact Information", FieldKind::Text, "Enter contact details"),
            field("Primary Needs", FieldKind::Multiline, "Describe primary needs"),
            field("Constraints", FieldKind::Multiline, "List constraints"),
            field("Success Criteria", FieldKind::Multiline, "Define success criteria"),
        ],
    },
];

const OPERATIONS_TEMPLATES: &[DocumentTemplate] = &[
    DocumentTemplate {
        department: DepartmentCode::Operations,
        document_type: "Client Correspondence List",
        fields: &[
            field("Client Name", FieldKind::Text, "Enter client name"),
            field("Date", FieldKind::Date, ""),
            field("Subject", FieldKind::Text, "Enter subject"),
            field(
                "Type of Correspondence",
                FieldKind::Text,
                "Email, Phone, Meeting, etc.",
            ),
            field("Summary", FieldKind::Multiline, "Brief summary of the correspondence"),
            field("Action Items", FieldKind::Multiline, "List action items"),
        ],
    },
    DocumentTemplate {
        department: DepartmentCode::Operations,
        document_type: "Local Purchase Order (LPO)",
        fields: &[
            field("LPO Number", FieldKind::Text, "Enter LPO number"),
            field("Supplier Name", FieldKind::Text, "Enter supplier name"),
            field("Order Date", FieldKind::Date, ""),
            field("Items Ordered", FieldKind::Multiline, "List items and quantities"),
            field("Total Amount", FieldKind::Text, "Enter total amount"),
            field("Expected Delivery Date", FieldKind::Date, ""),
            field("Special Instructions", FieldKind::Multiline, "Any special instructions"),
        ],
    },
];

const FINANCE_TEMPLATES: &[DocumentTemplate] = &[
    DocumentTemplate {
        department: DepartmentCode::Finance,
        document_type: "Contract",
        fields: &[
            field("Contract Number", FieldKind::Text, "Enter contract number"),
            field("Party A", FieldKind::Text, "Company name"),
            field("Party B", FieldKind::Text, "Client name"),
            field("Effective Date", FieldKind::Date, ""),
            field(
                "Terms and Conditions",
                FieldKind::Multiline,
                "Enter terms and conditions",
            ),
            field("Contract Value", FieldKind::Text, "Enter contract value"),
        ],
    },
    DocumentTemplate {
        department: DepartmentCode::Finance,
        document_type: "Invoice",
        fields: &[
            field("Invoice Number", FieldKind::Text, "Enter invoice number"),
            field("Client Name", FieldKind::Text, "Enter client name"),
            field("Invoice Date", FieldKind::Date, ""),
            field("Due Date", FieldKind::Date, ""),
            field("Line Items", FieldKind::Multiline, "Item, quantity, unit price"),
            field("Subtotal", FieldKind::Text, "Enter subtotal"),
            field("Tax", FieldKind::Text, "Enter tax"),
            field("Total Amount", FieldKind::Text, "Enter total amount"),
        ],
    },
    DocumentTemplate {
        department: DepartmentCode::Finance,
        document_type: "Confirmation Form",
        fields: &[
            field("Confirmation Number", FieldKind::Text, "Enter confirmation number"),
            field("Transaction Type", FieldKind::Text, "Enter transaction type"),
            field("Client Name", FieldKind::Text, "Enter client name"),
            field("Date", FieldKind::Date, ""),
            field("Transaction Details", FieldKind::Multiline, "Describe the transaction"),
            field("Amount", FieldKind::Text, "Enter amount"),
        ],
    },
];

const PRODUCTION_TEMPLATES: &[DocumentTemplate] = &[
    DocumentTemplate {
        department: DepartmentCode::Production,
        document_type: "Bill of Materials Form",
        fields: &[
            field("Product Name", FieldKind::Text, "Enter product name"),
            field(
                "Client Specifications",
                FieldKind::Multiline,
                "Enter client specifications",
            ),
            field("Materials List", FieldKind::Multiline, "Material, quantity, unit"),
            field("Total Material Cost", FieldKind::Text, "Enter total cost"),
        ],
    },
    DocumentTemplate {
        department: DepartmentCode::Production,
        document_type: "Role Assignment Form",
        fields: &[
            field("Project Name", FieldKind::Text, "Enter project name"),
            field("Project Manager", FieldKind::Text, "Enter project manager"),
            field("Team Assignments", FieldKind::Multiline, "Role: person, one per line"),
            field("Start Date", FieldKind::Date, ""),
        ],
    },
    DocumentTemplate {
        department: DepartmentCode::Production,
        document_type: "Component Order Form",
        fields: &[
            field("Order Number", FieldKind::Text, "Enter order number"),
            field("Supplier", FieldKind::Text, "Enter supplier"),
            field("Components", FieldKind::Multiline, "Component, quantity"),
            field("Required Delivery Date", FieldKind::Date, ""),
        ],
    },
    DocumentTemplate {
        department: DepartmentCode::Production,
        document_type: "Product Completion Form",
        fields: &[
            field("Product Name", FieldKind::Text, "Enter product name"),
            field("Batch Number", FieldKind::Text, "Enter batch number"),
            field("Completion Date", FieldKind::Date, ""),
            field("Quantity Completed", FieldKind::Number, "0"),
            field("Quality Check Status", FieldKind::Text, "Passed / Failed / Pending"),
            field("Notes", FieldKind::Multiline, "Additional notes"),
        ],
    },
];

const INVENTORY_TEMPLATES: &[DocumentTemplate] = &[
    DocumentTemplate {
        department: DepartmentCode::Inventory,
        document_type: "Stock in Form",
        fields: &[
            field("Date", FieldKind::Date, ""),
            field("Supplier", FieldKind::Text, "Enter supplier"),
            field("Items Received", FieldKind::Multiline, "Item, quantity, condition"),
            field("Received By", FieldKind::Text, "Enter receiver name"),
        ],
    },
    DocumentTemplate {
        department: DepartmentCode::Inventory,
        document_type: "Stock Out Form",
        fields: &[
            field("Date and Time", FieldKind::Text, "Enter date and time"),
            field("Requisition Number", FieldKind::Text, "Enter requisition number"),
            field("Items", FieldKind::Multiline, "Item, quantity"),
            field("Picked By", FieldKind::Text, "Enter picker name"),
            field("Purpose", FieldKind::Text, "Enter purpose"),
        ],
    },
    DocumentTemplate {
        department: DepartmentCode::Inventory,
        document_type: "Suppliers List",
        fields: &[
            field("Suppliers", FieldKind::Multiline, "Supplier, contact, items supplied"),
            field("Last Updated", FieldKind::Date, ""),
        ],
    },
];

const QUALITY_CONTROL_TEMPLATES: &[DocumentTemplate] = &[
    DocumentTemplate {
        department: DepartmentCode::QualityControl,
        document_type: "Client Specification Sheet",
        fields: &[
            field("Client Name", FieldKind::Text, "Enter client name"),
            field("Product Name", FieldKind::Text, "Enter product name"),
            field(
                "Technical Specifications",
                FieldKind::Multiline,
                "Enter technical specifications",
            ),
            field("Tolerances", FieldKind::Multiline, "Enter tolerances"),
            field("Testing Requirements", FieldKind::Multiline, "Enter testing requirements"),
        ],
    },
    DocumentTemplate {
        department: DepartmentCode::QualityControl,
        document_type: "Quality Inspection Certificate",
        fields: &[
            field("Certificate Number", FieldKind::Text, "Enter certificate number"),
            field("Product Name", FieldKind::Text, "Enter product name"),
            field("Batch Number", FieldKind::Text, "Enter batch number"),
            field("Inspection Date", FieldKind::Date, ""),
            field("Tests Performed", FieldKind::Multiline, "Test, method, outcome"),
            field("Result", FieldKind::Text, "Pass / Fail"),
            field("Inspector Name", FieldKind::Text, "Enter inspector name"),
        ],
    },
    DocumentTemplate {
        department: DepartmentCode::QualityControl,
        document_type: "Packing List",
        fields: &[
            field("Packing List Number", FieldKind::Text, "Enter packing list number"),
            field("Order Number", FieldKind::Text, "Enter order number"),
            field("Items", FieldKind::Multiline, "Item, quantity, package"),
            field("Total Packages", FieldKind::Number, "0"),
        ],
    },
    DocumentTemplate {
        department: DepartmentCode::QualityControl,
        document_type: "Warranty Card",
        fields: &[
            field("Warranty Number", FieldKind::Text, "Enter warranty number"),
            field("Product Name", FieldKind::Text, "Enter product name"),
            field("Serial Number", FieldKind::Text, "Enter serial number"),
            field("Purchase Date", FieldKind::Date, ""),
            field("Warranty Period", FieldKind::Text, "e.g. 12 months"),
            field("Warranty Terms", FieldKind::Multiline, "Enter warranty terms"),
        ],
    },
    DocumentTemplate {
        department: DepartmentCode::QualityControl,
        document_type: "Delivery Note",
        fields: &[
            field("Delivery Note Number", FieldKind::Text, "Enter delivery note number"),
            field("Delivery Date", FieldKind::Text, "Enter delivery date"),
            field("Recipient Name", FieldKind::Text, "Enter recipient name"),
            field("Delivery Address", FieldKind::Multiline, "Enter delivery address"),
            field("Items Delivered", FieldKind::Multiline, "Item, quantity"),
            field("Delivered By", FieldKind::Text, "Enter deliverer name"),
        ],
    },
];

const WAREHOUSING_TEMPLATES: &[DocumentTemplate] = &[DocumentTemplate {
    department: DepartmentCode::Warehousing,
    document_type: "Date Record, Manufacturing",
    fields: &[
        field("Batch Number", FieldKind::Text, "Enter batch number"),
        field("Product Name", FieldKind::Text, "Enter product name"),
        field("Manufacturing Date", FieldKind::Date, ""),
        field("Quantity Produced", FieldKind::Number, "0"),
        field("Expiry Date", FieldKind::Date, ""),
        field("Storage Location", FieldKind::Text, "Enter storage location"),
        field("Notes", FieldKind::Multiline, "Additional notes"),
    ],
}];

const FIELD_ACTIVITY_TEMPLATES: &[DocumentTemplate] = &[
    DocumentTemplate {
        department: DepartmentCode::FieldActivity,
        document_type: "Field Work Form",
        fields: &[
            field("Work Order Number", FieldKind::Text, "Enter work order number"),
            field("Client/Site Name", FieldKind::Text, "Enter client or site name"),
            field("Location", FieldKind::Multiline, "Enter location"),
            field("Date and Time", FieldKind::Text, "Enter date and time"),
            field("Technician Name", FieldKind::Text, "Enter technician name"),
            field("Work Performed", FieldKind::Multiline, "Describe work performed"),
            field("Materials Used", FieldKind::Multiline, "Material, quantity"),
            field("Time Spent", FieldKind::Number, "Hours"),
            field("Client Signature", FieldKind::Text, "Enter client name"),
        ],
    },
    DocumentTemplate {
        department: DepartmentCode::FieldActivity,
        document_type: "Questionnaires",
        fields: &[
            field("Survey Title", FieldKind::Text, "Enter survey title"),
            field("Respondent Name", FieldKind::Text, "Enter respondent name"),
            field("Date", FieldKind::Date, ""),
            field(
                "Questions and Responses",
                FieldKind::Multiline,
                "Question: response, one per line",
            ),
            field("Additional Notes", FieldKind::Multiline, "Additional notes"),
        ],
    },
];
