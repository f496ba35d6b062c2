//! Prompt builders for the three generation passes.
//!
//! Every pass shares the same output contract: a single zero-indentation
//! top-level node, 4-space indentation per level, and a `(TYPE_*)`
//! annotation after every label. INDICATION and RESULT run multi-iteration
//! refinement (initial outline → progressive expansion → final completion),
//! each iteration embedding the previous iteration's full text; TECHNICAL
//! is generated in a single shot.

const ALLOWED_NODE_TYPES: &str = "\
- TYPE_TITLE
- TYPE_TOPIC
- TYPE_QUESTION
- TYPE_QCM - multiple choice answer
- TYPE_QCS - single choice answer
- TYPE_MEASURE
- TYPE_DATE
- TYPE_TEXT : free text response
- TYPE_OPERATION
- TYPE_CALCULATION";

const SPECIAL_NODE_GUIDANCE: &str = "\
**Additional Details for Special Node Types:**
- TYPE_OPERATION: This node functions as a decision switch using classical Boolean logic. It combines conditions with operators such as AND, OR, NOT, >, < and =. For example:

  Symptoms Motivating Examination: (TYPE_TOPIC)
    Combined Respiratory Criteria: (TYPE_OPERATION)
        Is the patient experiencing fever? (TYPE_QUESTION)
            - Yes (TYPE_QCS)
            - No (TYPE_QCS)
        AND
        Is the patient experiencing cough? (TYPE_QUESTION)
            - Yes (TYPE_QCS)
            - No (TYPE_QCS)

  The branch \"Combined Respiratory Criteria\" only triggers further evaluation when both conditions (fever AND cough) are met. Adapt the logical structure to the clinical context; do not copy this example literally.
- TYPE_CALCULATION: This node computes a value from previously collected measurement responses using basic mathematical operations, e.g. \"BMI = weight / (height^2)\" once weight and height measurements exist.";

fn joined(diseases: &[String]) -> String {
    diseases.join(", ")
}

// ── INDICATION ───────────────────────────────────────────────────────────────

pub fn indication_system(file_type: &str, diseases: &[String], clinical_context: &str) -> String {
    let diseases = joined(diseases);
    format!(
        "**goal:**
You are a medical professional. Your task is to generate a structured, hierarchical INDICATION tree for a radiological exam. The tree should clearly document the clinical rationale by including patient details (such as age, sex, and history), the main symptoms prompting the exam, and disease-specific diagnostic questions. This output must be strictly tailored to the file type \"{file_type}\" and the following diseases: {diseases}.

**strictly follow** **User input:**
{clinical_context} **this should be followed strictly**

**return format:**
- Produce exactly one top-level node:
  `INDICATION:` (TYPE_TITLE)
- All subsequent lines must be indented by 4 spaces per level.
- Every node must include its label followed immediately by its nodetype in parentheses. For example:
  - \"Patient Information: (TYPE_TOPIC)\"
  - \"Is the patient experiencing chest pain? (TYPE_QUESTION)\"
- Allowed node types include:
{ALLOWED_NODE_TYPES}

{SPECIAL_NODE_GUIDANCE}

**Example Output Structure (One-Shot):**

INDICATION: (TYPE_TITLE)
    Patient Information: (TYPE_TOPIC)
        Age: (TYPE_QUESTION)
            - Adult (TYPE_QCM)
            - Pediatric (TYPE_QCM)
    Symptoms Motivating Examination: (TYPE_TOPIC)
        Chest Pain: (TYPE_QUESTION)
            - Sudden severe pain (TYPE_QCM)
            - Dull pressure (TYPE_QCM)
            - Burning sensation (TYPE_QCM)
    ... (other branches)

**warnings:**
- Do not produce more than one top-level \"INDICATION:\" node; only one is allowed and it must have zero indentation.
- Every branch must include a mandatory \"Symptoms Motivating Examination:\" section with relevant clinical options.
- Avoid duplicating node names at the same hierarchical level.
- Do not include any extraneous output (such as quotes or additional text) beyond the structured tree.
- **Strictly do not output anything other than the structured output, not even quotes.**

**context dump:**
- The INDICATION tree is specifically for a radiological exam related to \"{file_type}\" and the diseases: {diseases}.
- The structure must encompass both general patient details and a detailed, mandatory \"Symptoms Motivating Examination:\" section.
- The tree should support various answer types (MCQ, SCQ, numerical, date, free text) as well as logical and calculation nodes for complex decision-making."
    )
}

pub fn indication_user(
    iteration: usize,
    iterations: usize,
    previous: Option<&str>,
    file_type: &str,
    diseases: &[String],
) -> String {
    let diseases = joined(diseases);
    match previous {
        None => format!(
            "**goal:**
Generate an initial structured INDICATION section for a radiological exam strictly related to \"{file_type}\" and the following diseases: {diseases}.
Focus on listing the major high-level categories and nodes with minimal sub-level detail. Provide an outline that can be expanded in subsequent iterations. A mandatory \"Symptoms Motivating Examination:\" section must be included.

**return format:**
- A single top-level \"INDICATION:\" node (with zero indentation) followed by all subordinate nodes indented at 4 spaces per level.
- Every node must include its text and nodetype immediately after (e.g., \"Age: (TYPE_QUESTION)\").

**warnings:**
- Ensure only one top-level \"INDICATION:\" node is produced.
- Include the \"Symptoms Motivating Examination:\" section with relevant clinical options.
- Do not duplicate node names at the same level or include any extra text outside the structured tree."
        ),
        Some(previous) if iteration == iterations - 1 => format!(
            "**goal:**
Refine and fully complete the provided INDICATION section {previous} by adding deeper sub-questions to nodes that are still underdeveloped or incomplete. Ensure that every clinically relevant question is addressed and no node remains partially expanded. Focus particularly on expanding disease-specific and symptom-related branches until every clinically relevant question is exhausted.

**return format:**
- Retain the single top-level \"INDICATION:\" node with all further details indented at 4 spaces per level.
- Every node must continue to follow the format: \"Node Text: (Nodetype)\".
- Expand branches with additional sub-nodes such as more detailed symptom queries, logical nodes, or calculation nodes, as appropriate.

**warnings:**
- Do not add any new top-level nodes or duplicate the \"INDICATION:\" node.
- Avoid unnecessary depth in general nodes (e.g., \"Patient Information:\") while fully elaborating all disease-specific and symptom-related nodes.
- Ensure that no node names are repeated at the same hierarchical level."
        ),
        Some(previous) => format!(
            "**goal:**
Refine and expand the existing INDICATION section {previous} by increasing the depth of the tree. Add deeper sub-questions and details for disease-specific and symptom-related branches, but do not finalize all nodes. This iteration progressively elaborates the content without completing every branch fully.

**return format:**
- Keep the single top-level \"INDICATION:\" node with subsequent nodes indented at 4 spaces per level.
- All nodes must include their label followed by the nodetype in parentheses.

**warnings:**
- Only one top-level \"INDICATION:\" node is allowed; all additional nodes must be indented.
- Do not duplicate node names at the same hierarchical level.
- Ensure the \"Symptoms Motivating Examination:\" section remains present and is further expanded with clinically relevant details."
        ),
    }
}

// ── TECHNICAL ────────────────────────────────────────────────────────────────

pub fn technical_system(file_type: &str, diseases: &[String], clinical_context: &str) -> String {
    let diseases = joined(diseases);
    format!(
        "**goal:**
You are a medical professional. Your goal is to generate a structured, hierarchical TECHNICAL tree for a radiological exam. This tree should detail the technical parameters and protocols used during imaging, such as the use of contrast injections, imaging sequences (e.g., T1, T2, FLAIR, angiographic sequences), and other modality-specific settings. This output must be strictly tailored to the file type \"{file_type}\" and the following diseases: {diseases}. The TECHNICAL tree follows the INDICATION tree for context, but it should not duplicate information from the INDICATION or RESULT trees.

**strictly follow** **User input:**
{clinical_context} this should be followed strictly

**return format:**
- Produce exactly one top-level node:
  `TECHNICAL:` (TYPE_TITLE)
- All subsequent lines must be indented by 4 spaces per level.
- Each node must include its label followed immediately by its nodetype in parentheses. For example:
  - \"Injection Protocol: (TYPE_TOPIC)\"
  - \"Is contrast injection used? (TYPE_QUESTION)\"
  - \"Yes (TYPE_QCS)\"
- Allowed node types include:
{ALLOWED_NODE_TYPES}

**Example Output Structure (One-Shot):**

TECHNICAL: (TYPE_TITLE)
    Injection Protocol: (TYPE_TOPIC)
        Is contrast injection used? (TYPE_QUESTION)
            - Yes (TYPE_QCS)
            - No (TYPE_QCS)
    Sequences: (TYPE_TOPIC)
        Ax T1: (TYPE_QCS)
        Ax T2: (TYPE_QCS)
        Ax FLAIR: (TYPE_QCS)
        3D T1 IR: (TYPE_QCS)
    Additional Parameters: (TYPE_TOPIC)
        Any specific coil used? (TYPE_QUESTION)
            - Head coil (TYPE_QCS)
            - Neck coil (TYPE_QCS)
            - Multichannel coil (TYPE_QCS)

**warnings:**
- Do not produce more than one top-level \"TECHNICAL:\" node; only one is allowed and it must have zero indentation.
- Group technical details logically (e.g., injection protocol, sequences, additional parameters).
- Avoid duplicating node names at the same hierarchical level.
- Do not include any extraneous output (such as quotes or additional text) beyond the structured tree.

**context dump:**
- The TECHNICAL tree captures all relevant imaging protocols for a radiological exam of type \"{file_type}\" in the context of diseases: {diseases}.
- Nodes can represent whether contrast was used, what sequences or series were acquired, and any special imaging parameters (e.g., coil types, slice thickness)."
    )
}

pub fn technical_user(file_type: &str, diseases: &[String]) -> String {
    let diseases = joined(diseases);
    format!(
        "**goal:**
Generate a single structured and deep TECHNICAL section for a radiological exam strictly based on the imaging protocols used. This output must be tailored to the file type \"{file_type}\" and the following diseases: {diseases}. The tree should cover key technical aspects such as contrast injection usage, imaging sequences, and any additional parameters relevant to the modality.

**return format:**
- A single top-level \"TECHNICAL:\" node (with zero indentation) followed by all subordinate nodes indented at 4 spaces per level.
- Each node must include its text and nodetype immediately after (e.g., \"Injection Protocol: (TYPE_TOPIC)\").

**warnings:**
- Ensure only one top-level \"TECHNICAL:\" node is produced.
- Avoid duplicating node names at the same level.
- Do not include any extra text outside the structured tree."
    )
}

// ── RESULT ───────────────────────────────────────────────────────────────────

pub fn result_system(
    file_type: &str,
    diseases: &[String],
    clinical_context: &str,
    indication_text: &str,
    technical_text: &str,
) -> String {
    let diseases = joined(diseases);
    format!(
        "**goal:**
You are a medical professional. Your goal is to generate a structured, hierarchical RESULT tree for a radiological exam. This tree should detail the radiological findings in a systematic manner, capturing observations about anatomical structures (e.g., pleura, parenchyma, mediastinum, bone structures, devices) and any detected abnormalities (e.g., effusions, nodules, calcifications). This output must be strictly tailored to the file type \"{file_type}\" and the following diseases: {diseases}. The RESULT tree follows the completion of an INDICATION tree:
{indication_text}
and a TECHNICAL tree:
{technical_text}
both of which may be referenced for context but should not be duplicated here.

**strictly follow** **User input:**
{clinical_context} this should be followed strictly

**return format:**
- Produce exactly one top-level node:
  `RESULT:` (TYPE_TITLE)
- All subsequent lines must be indented by 4 spaces per level.
- Each node must include its label followed immediately by its nodetype in parentheses. For example:
  - \"Pleura: (TYPE_TOPIC)\"
  - \"Is there a pleural effusion? (TYPE_QUESTION)\"
  - \"None (TYPE_QCS)\"
- Allowed node types include:
{ALLOWED_NODE_TYPES}

{SPECIAL_NODE_GUIDANCE}

**Example Output Structure (One-Shot):**
RESULT: (TYPE_TITLE)
  Pleura: (TYPE_TOPIC)
      Is there a pleural effusion? (TYPE_QUESTION)
          - None (TYPE_QCS)
          - Mild (TYPE_QCS)
          - Moderate (TYPE_QCS)
          - Large (TYPE_QCS)
      Is there a pneumothorax? (TYPE_QUESTION)
          - Yes (TYPE_QCS)
          - No (TYPE_QCS)
  Parenchyma: (TYPE_TOPIC)
      Presence of parenchymal abnormality: (TYPE_QUESTION)
          - Mass (TYPE_QCM)
          - Nodule (TYPE_QCM)
          - Consolidation (TYPE_QCM)
  Mediastinum: (TYPE_TOPIC)
      Any mediastinal enlargement? (TYPE_QUESTION)
          - Yes (TYPE_QCS)
          - No (TYPE_QCS)
  ...

**warnings:**
- Do not produce more than one top-level \"RESULT:\" node; only one is allowed and it must have zero indentation.
- Ensure findings are grouped logically (e.g., pleural, parenchymal, mediastinal, skeletal) and further broken down by abnormal or normal findings.
- Avoid duplicating node names at the same hierarchical level.
- Do not include any extraneous output (such as quotes or additional text) beyond the structured tree.
- **Strictly do not output anything other than the structured output, not even quotes.**

**context dump:**
- The RESULT tree captures the final imaging observations from a radiological exam, potentially referencing information from the previously filled INDICATION and TECHNICAL trees.
- Nodes can represent normal or abnormal findings, sub-classifications of abnormalities, measurement details, or additional descriptive text where clinically relevant."
    )
}

pub fn result_user(
    iteration: usize,
    iterations: usize,
    previous: Option<&str>,
    file_type: &str,
    diseases: &[String],
) -> String {
    let diseases = joined(diseases);
    match previous {
        None => format!(
            "**goal:**
Generate an initial structured RESULT section for a radiological exam based on final imaging observations.
Tailor the output to \"{file_type}\" and diseases: {diseases}.
List major anatomical categories (e.g., pleura, parenchyma, mediastinum, bones, devices) with minimal detail."
        ),
        Some(previous) if iteration == iterations - 1 => format!(
            "**goal:**
Refine and fully complete the provided RESULT section {previous} by adding deeper sub-questions or nodes for each anatomical category. Focus on detailing any abnormalities (e.g., describing size, extent, severity, specific locations) and including measurement, logical, or calculation nodes as necessary. Ensure that every node is properly generated without any cut-offs.

**return format:**
- Retain the single top-level \"RESULT:\" node with all further details indented at 4 spaces per level.
- Every node must continue to follow the format: \"Node Text: (Nodetype)\".
- Expand branches with additional sub-nodes such as more detailed abnormality classifications, measurement nodes, logical nodes, or calculation nodes."
        ),
        Some(previous) => format!(
            "**goal:**
Refine and expand the existing RESULT section {previous} by adding deeper sub-questions and details where clinically appropriate. Emphasize further elaboration of abnormal findings while maintaining the overall structure.

**return format:**
- Maintain a single top-level \"RESULT:\" node with subsequent nodes indented at 4 spaces per level.
- All nodes must include their label followed by the nodetype in parentheses."
        ),
    }
}
