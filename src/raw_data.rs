pub use consonants::*;
pub use vowels::*;

mod vowels {
    pub const VOWELS: &str = "\
descriptiveName,ipaChar,commonness,height,backness,roundedness,type
CloseFrontUnroundedVowel,i,common,close,front,unrounded,vowel
CloseFrontRoundedVowel,y,normal,close,front,rounded,vowel
CloseCentralUnroundedVowel,ɨ,normal,close,central,unrounded,vowel
CloseCentralRoundedVowel,ʉ,normal,close,central,rounded,vowel
CloseBackUnroundedVowel,ɯ,normal,close,back,unrounded,vowel
CloseBackRoundedVowel,u,common,close,back,rounded,vowel
NearCloseNearFrontUnroundedVowel,ɪ,normal,near-close,near-front,unrounded,vowel
NearCloseNearFrontRoundedVowel,ʏ,normal,near-close,near-front,rounded,vowel
NearCloseNearBackRoundedVowel,ʊ,normal,near-close,near-back,rounded,vowel
CloseMidFrontUnroundedVowel,e,common,close-mid,front,unrounded,vowel
CloseMidFrontRoundedVowel,ø,normal,close-mid,front,rounded,vowel
CloseMidCentralUnroundedVowel,ɘ,normal,close-mid,central,unrounded,vowel
CloseMidCentralRoundedVowel,ɵ,normal,close-mid,central,rounded,vowel
CloseMidBackUnroundedVowel,ɤ,normal,close-mid,back,unrounded,vowel
CloseMidBackRoundedVowel,o,common,close-mid,back,rounded,vowel
MidFrontUnroundedVowel,e̞,normal,mid,front,unrounded,vowel
MidFrontRoundedVowel,ø̞,normal,mid,front,rounded,vowel
MidCentralVowel,ə,normal,mid,central,unrounded,vowel
MidCentralRoundedVowel,ɵ̞,normal,mid,central,rounded,vowel
MidBackUnroundedVowel,ɤ̞,normal,mid,back,unrounded,vowel
MidBackRoundedVowel,o̞,normal,mid,back,rounded,vowel
OpenMidFrontUnroundedVowel,ɛ,normal,open-mid,front,unrounded,vowel
OpenMidFrontRoundedVowel,œ,normal,open-mid,front,rounded,vowel
OpenMidCentralUnroundedVowel,ɜ,normal,open-mid,central,unrounded,vowel
OpenMidCentralRoundedVowel,ɞ,normal,open-mid,central,rounded,vowel
OpenMidBackUnroundedVowel,ʌ,normal,open-mid,back,unrounded,vowel
OpenMidBackRoundedVowel,ɔ,normal,open-mid,back,rounded,vowel
NearOpenFrontUnroundedVowel,æ,normal,near-open,front,unrounded,vowel
NearOpenCentralVowel,ɐ,normal,near-open,central,unrounded,vowel
OpenFrontUnroundedVowel,a,common,open,front,unrounded,vowel
OpenFrontRoundedVowel,ɶ,normal,open,front,rounded,vowel
OpenCentralUnroundedVowel,ä,normal,open,central,unrounded,vowel
OpenBackUnroundedVowel,ɑ,normal,open,back,unrounded,vowel
OpenBackRoundedVowel,ɒ,normal,open,back,rounded,vowel";
}

mod consonants {
    // Consonants described as extremely rare, or as likely only existing as allophones,
    // are left out.
    pub const CONSONANTS: &str = "\
descriptiveName,ipaChar,commonness,phonation,manner,place,type
VoicelessBilabialNasal,m̥,normal,voiceless,nasal,bilabial,pulmonic
VoicedBilabialNasal,m,common,voiced,nasal,bilabial,pulmonic
VoicedLabiodentalNasal,ɱ,normal,voiced,nasal,labiodental,pulmonic
VoicelessAlveolarNasal,n̥,normal,voiceless,nasal,alveolar,pulmonic
VoicedAlveolarNasal,n,common,voiced,nasal,alveolar,pulmonic
VoicedRetroflexNasal,ɳ,normal,voiced,nasal,retroflex,pulmonic
VoicelessPalatalNasal,ɲ̊,normal,voiceless,nasal,palatal,pulmonic
VoicedPalatalNasal,ɲ,normal,voiced,nasal,palatal,pulmonic
VoicelessVelarNasal,ŋ̊,normal,voiceless,nasal,velar,pulmonic
VoicedVelarNasal,ŋ,normal,voiced,nasal,velar,pulmonic
VoicedUvularNasal,ɴ,normal,voiced,nasal,uvular,pulmonic
VoicelessBilabialPlosive,p,common,voiceless,plosive,bilabial,pulmonic
VoicedBilabialPlosive,b,common,voiced,plosive,bilabial,pulmonic
VoicelessLabiodentalPlosive,p̪,normal,voiceless,plosive,labiodental,pulmonic
VoicedLabiodentalPlosive,b̪,normal,voiced,plosive,labiodental,pulmonic
VoicelessLinguolabialPlosive,t̼,normal,voiceless,plosive,linguolabial,pulmonic
VoicedLinguolabialPlosive,d̼,normal,voiced,plosive,linguolabial,pulmonic
VoicelessAlveolarPlosive,t,common,voiceless,plosive,alveolar,pulmonic
VoicedAlveolarPlosive,d,common,voiced,plosive,alveolar,pulmonic
VoicelessRetroflexPlosive,ʈ,normal,voiceless,plosive,retroflex,pulmonic
VoicedRetroflexPlosive,ɖ,normal,voiced,plosive,retroflex,pulmonic
VoicelessPalatalPlosive,c,normal,voiceless,plosive,palatal,pulmonic
VoicedPalatalPlosive,ɟ,normal,voiced,plosive,palatal,pulmonic
VoicelessVelarPlosive,k,common,voiceless,plosive,velar,pulmonic
VoicedVelarPlosive,g,common,voiced,plosive,velar,pulmonic
VoicelessUvularPlosive,q,normal,voiceless,plosive,uvular,pulmonic
VoicedUvularPlosive,ɢ,normal,voiced,plosive,uvular,pulmonic
EpiglottalPlosive,ʡ,normal,voiceless,plosive,pharyngeal,pulmonic
GlottalStop,ʔ,normal,voiceless,plosive,glottal,pulmonic
VoicelessAlveolarSibilant,s,common,voiceless,sibilant fricative,alveolar,pulmonic
VoicedAlveolarSibilant,z,normal,voiced,sibilant fricative,alveolar,pulmonic
VoicelessPostalveolarSibilant,ʃ,normal,voiceless,sibilant fricative,postalveolar,pulmonic
VoicedPostalveolarSibilant,ʒ,normal,voiced,sibilant fricative,postalveolar,pulmonic
VoicelessRetroflexSibilant,ʂ,normal,voiceless,sibilant fricative,retroflex,pulmonic
VoicedRetroflexSibilant,ʐ,normal,voiced,sibilant fricative,retroflex,pulmonic
VoicelessAlveolopalatalSibilant,ɕ,normal,voiceless,sibilant fricative,postalveolar palatal,pulmonic
VoicedAlveolopalatalSibilant,ʑ,normal,voiced,sibilant fricative,postalveolar palatal,pulmonic
VoicelessBilabialFricative,ɸ,normal,voiceless,fricative,bilabial,pulmonic
VoicedBilabialFricative,β,normal,voiced,fricative,bilabial,pulmonic
VoicelessLabiodentalFricative,f,common,voiceless,fricative,labiodental,pulmonic
VoicedLabiodentalFricative,v,normal,voiced,fricative,labiodental,pulmonic
VoicelessLinguolabialFricative,θ̼,normal,voiceless,fricative,linguolabial,pulmonic
VoicedLinguolabialFricative,ð̼,normal,voiced,fricative,linguolabial,pulmonic
VoicelessDentalFricative,θ,normal,voiceless,fricative,dental,pulmonic
VoicedDentalFricative,ð,normal,voiced,fricative,dental,pulmonic
VoicelessAlveolarFricative,θ̠,normal,voiceless,fricative,alveolar,pulmonic
VoicedAlveolarFricative,ð̠,normal,voiced,fricative,alveolar,pulmonic
VoicelessPostalveolarFricative,ɹ̠̊˔,normal,voiceless,fricative,postalveolar,pulmonic
VoicedPostalveolarFricative,ɹ̠˔,normal,voiced,fricative,postalveolar,pulmonic
VoicelessRetroflexFricative,ɻ̝̊,normal,voiceless,fricative,retroflex,pulmonic
VoicedRetroflexFricative,ɻ̝,normal,voiced,fricative,retroflex,pulmonic
VoicelessPalatalFricative,ç,normal,voiceless,fricative,palatal,pulmonic
VoicedPalatalFricative,ʝ,normal,voiced,fricative,palatal,pulmonic
VoicelessVelarFricative,x,normal,voiceless,fricative,velar,pulmonic
VoicedVelarFricative,ɣ,normal,voiced,fricative,velar,pulmonic
VoicelessUvularFricative,χ,normal,voiceless,fricative,uvular,pulmonic
VoicedUvularFricative,ʁ,normal,voiced,fricative,uvular,pulmonic
VoicelessPharyngealFricative,ħ,normal,voiceless,fricative,pharyngeal,pulmonic
VoicedPharyngealFricative,ʕ,normal,voiced,fricative,pharyngeal,pulmonic
VoicelessGlottalFricative,h,normal,voiceless,fricative,glottal,pulmonic
VoicedGlottalFricative,ɦ,normal,voiced,fricative,glottal,pulmonic
VoicedLabiodentalApproximant,ʋ,normal,voiced,approximant,labiodental,pulmonic
VoicedAlveolarApproximant,ɹ,normal,voiced,approximant,alveolar,pulmonic
VoicedRetroflexApproximant,ɻ,normal,voiced,approximant,retroflex,pulmonic
VoicedPalatalApproximant,j,common,voiced,approximant,palatal,pulmonic
VoicedVelarApproximant,ɰ,normal,voiced,approximant,velar,pulmonic
VoicedLabialVelarApproximant,w,normal,voiced,approximant,bilabial velar,pulmonic
VoicedLabiodentalFlap,ⱱ,normal,voiced,flap,labiodental,pulmonic
VoicedAlveolarFlap,ɾ,normal,voiced,flap,alveolar,pulmonic
VoicedRetroflexFlap,ɽ,normal,voiced,flap,retroflex,pulmonic
VoicedBilabialTrill,ʙ,normal,voiced,trill,bilabial,pulmonic
VoicelessAlveolarTrill,r̥,normal,voiceless,trill,alveolar,pulmonic
VoicedAlveolarTrill,r,normal,voiced,trill,alveolar,pulmonic
VoicelessUvularTrill,ʀ̥,normal,voiceless,trill,uvular,pulmonic
VoicedUvularTrill,ʀ,normal,voiced,trill,uvular,pulmonic
VoicelessPharyngealTrill,ʜ,normal,voiceless,trill,pharyngeal,pulmonic
VoicedPharyngealTrill,ʢ,normal,voiced,trill,pharyngeal,pulmonic
VoicelessAlveolarLateralFricative,ɬ,normal,voiceless,lateral fricative,alveolar,pulmonic
VoicedAlveolarLateralFricative,ɮ,normal,voiced,lateral fricative,alveolar,pulmonic
VoicelessRetroflexLateralFricative,ꞎ,normal,voiceless,lateral fricative,retroflex,pulmonic
VoicedAlveolarLateralApproximant,l,common,voiced,lateral approximant,alveolar,pulmonic
VoicedRetroflexLateralApproximant,ɭ,normal,voiced,lateral approximant,retroflex,pulmonic
VoicedPalatalLateralApproximant,ʎ,normal,voiced,lateral approximant,palatal,pulmonic
VoicedVelarLateralApproximant,ʟ,normal,voiced,lateral approximant,velar,pulmonic
VoicedUvularLateralApproximant,ʟ̠,normal,voiced,lateral approximant,uvular,pulmonic
VoicelessAlveolarLateralFlap,ɺ̥,normal,voiceless,lateral flap,alveolar,pulmonic
VoicedAlveolarLateralFlap,ɺ,normal,voiced,lateral flap,alveolar,pulmonic
VoicedPalatalLateralFlap,ʎ̆,normal,voiced,lateral flap,palatal,pulmonic
BilabialEjectiveStop,pʼ,normal,voiceless,ejective plosive,bilabial,nonpulmonic
AlveolarEjectiveStop,tʼ,normal,voiceless,ejective plosive,alveolar,nonpulmonic
RetroflexEjectiveStop,ʈʼ,normal,voiceless,ejective plosive,retroflex,nonpulmonic
PalatalEjectiveStop,cʼ,normal,voiceless,ejective plosive,palatal,nonpulmonic
VelarEjectiveStop,kʼ,normal,voiceless,ejective plosive,velar,nonpulmonic
UvularEjectiveStop,qʼ,normal,voiceless,ejective plosive,uvular,nonpulmonic
EpiglottalEjective,ʡʼ,normal,voiceless,ejective plosive,pharyngeal,nonpulmonic
BilabialEjectiveFricative,ɸʼ,normal,voiceless,ejective fricative,bilabial,nonpulmonic
LabiodentalEjectiveFricative,fʼ,normal,voiceless,ejective fricative,labiodental,nonpulmonic
DentalEjectiveFricative,θʼ,normal,voiceless,ejective fricative,dental,nonpulmonic
AlveolarEjectiveFricative,sʼ,normal,voiceless,ejective sibilant fricative,alveolar,nonpulmonic
PostalveolarEjectiveFricative,ʃʼ,normal,voiceless,ejective sibilant fricative,postalveolar,nonpulmonic
RetroflexEjectiveFricative,ʂʼ,normal,voiceless,ejective sibilant fricative,retroflex,nonpulmonic
PalatalEjectiveFricative,ɕʼ,normal,voiceless,ejective sibilant fricative,palatal,nonpulmonic
VelarEjectiveFricative,xʼ,normal,voiceless,ejective fricative,velar,nonpulmonic
UvularEjectiveFricative,χʼ,normal,voiceless,ejective fricative,uvular,nonpulmonic
AlveolarLateralEjectiveFricative,ɬʼ,normal,voiceless,ejective lateral fricative,alveolar,nonpulmonic
VoicelessBilabialClick,k͡ʘ,normal,voiceless,click,bilabial,nonpulmonic
VoicelessDentalClick,k͡ǀ,normal,voiceless,click,dental,nonpulmonic
VoicelessAlveolarClick,k͡ǃ,normal,voiceless,click,alveolar,nonpulmonic
VoicelessPalatalClick,k͡ǂ,normal,voiceless,click,palatal,nonpulmonic
VoicedBilabialClick,ɡ͡ʘ,normal,voiced,click,bilabial,nonpulmonic
VoicedDentalClick,ɡ͡ǀ,normal,voiced,click,dental,nonpulmonic
VoicedAlveolarClick,ɡ͡ǃ,normal,voiced,click,alveolar,nonpulmonic
VoicedPalatalClick,ɡ͡ǂ,normal,voiced,click,palatal,nonpulmonic
VoicedNasalBilabialClick,ŋ͡ʘ,normal,voiced,nasal click,bilabial,nonpulmonic
VoicedNasalDentalClick,ŋ͡ǀ,normal,voiced,nasal click,dental,nonpulmonic
VoicedNasalAlveolarClick,ŋ͡ǃ,normal,voiced,nasal click,alveolar,nonpulmonic
VoicedNasalPalatalClick,ŋ͡ǂ,normal,voiced,nasal click,palatal,nonpulmonic
VoicelessLateralVelarClick,k͡ǁ,normal,voiceless,lateral click,velar,nonpulmonic
VoicedLateralVelarClick,ɡ͡ǁ,normal,voiced,lateral click,velar,nonpulmonic
VoicedNasalLateralVelarClick,ŋ͡ǁ,normal,voiced,nasal lateral click,velar,nonpulmonic
VoicedBilabialImplosive,ɓ,normal,voiced,implosive,bilabial,nonpulmonic
VoicelessBilabialImplosive,ɓ̥,normal,voiceless,implosive,bilabial,nonpulmonic
VoicedAlveolarImplosive,ɗ,normal,voiced,implosive,alveolar,nonpulmonic
VoicelessAlveolarImplosive,ɗ̥,normal,voiceless,implosive,alveolar,nonpulmonic
VoicedPalatalImplosive,ʄ,normal,voiced,implosive,palatal,nonpulmonic
VoicelessPalatalImplosive,ʄ̊,normal,voiceless,implosive,palatal,nonpulmonic
VoicedVelarImplosive,ɠ,normal,voiced,implosive,velar,nonpulmonic
VoicelessVelarImplosive,ɠ̊,normal,voiceless,implosive,velar,nonpulmonic
VoicelessUvularImplosive,ʛ̥,normal,voiceless,implosive,uvular,nonpulmonic";
}
