/// Meeting used by `scribe demo`.
pub const SAMPLE_TRANSCRIPT: &str = "\
Sarah (Project Manager): Good morning, everyone. Thanks for joining. The main agenda today is to finalize the plan for the new 'Project Apollo' login page redesign. Mark, how are the backend preparations going?

Mark (Lead Developer): Morning. The authentication service is solid. I've set up the basic endpoint, but I need the final specs for the data we'll be collecting on the sign-up form. Are we adding Google OAuth?

Chloe (UX/UI Designer): On the design front, I have two mockups. Mockup A is a traditional two-column layout. Mockup B is a cleaner, single-column layout which my research suggests is better for mobile conversions.

Sarah (Project Manager): Great points. Mobile-first is key for this project. Let's go with Mockup B, the single-column layout. That's our first decision. Chloe, can you create the final high-fidelity assets for that one? Let's have those ready for review by this Wednesday EOD.

Chloe (UX/UI Designer): Will do. I'll have them ready.

Sarah (Project Manager): Perfect. Mark, regarding the sign-up form, let's keep it simple for now. Just email, password, and full name. We will table the Google OAuth discussion for a future release to avoid scope creep. So, your action item is to finalize the authentication endpoint to accept just those three fields. Can you get that done by Friday?

Mark (Lead Developer): Yes, that's no problem at all. I'll have the API documentation updated by Friday as well.

Sarah (Project Manager): Fantastic. That's all for today then. Great progress, team!
";
