//! Canned assistant texts for the symptom checker.

/// Greeting that opens every chat session.
pub const GREETING: &str = "Hello! I'm your AI Health Assistant. I can help you with symptom checking, health advice, and determining if you need emergency care. What symptoms are you experiencing today?";

/// Reply for emergency-indicative symptoms.
pub const EMERGENCY_RESPONSE: &str = "🚨 This sounds like a medical emergency. Please call 911 immediately or go to the nearest emergency room. Do not delay seeking immediate medical attention.";

/// Reply for symptoms that may relate to blood disorders or blood loss.
pub const BLOOD_RELATED_RESPONSE: &str = "I notice you're experiencing symptoms that could be related to blood disorders or blood loss. Based on your symptoms, I recommend scheduling a consultation with a doctor. Would you like me to help you book a telehealth appointment?";

/// Reply for common, self-limiting symptoms.
pub const GENERAL_RESPONSE: &str = "These symptoms suggest a common viral infection. I recommend rest, staying hydrated, and monitoring your temperature. If symptoms worsen or persist for more than 3 days, please consult a healthcare provider.";

/// Reply when nothing in the input was recognized.
pub const DEFAULT_RESPONSE: &str = "I understand you're experiencing some health concerns. Can you provide more specific details about your symptoms? For example: when did they start, how severe are they, and are there any accompanying symptoms?";

/// Preset prompts offered next to the chat input, as `(label, text)`.
pub const QUICK_ACTIONS: [(&str, &str); 3] = [
    ("Common Cold Symptoms", "I have a headache and fever"),
    ("Fatigue & Weakness", "I'm feeling very tired and weak"),
    ("Emergency", "I have severe chest pain"),
];

/// Emergency contact line shown under the chat.
pub const EMERGENCY_CONTACT: &str = "Emergency: 911";
